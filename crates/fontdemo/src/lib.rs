// fontdemo: native side of the fontdemo Android app
//
// Exposes a single boundary operation, `load_fonts_info`, which inspects a
// directory and returns a text report. Failures are part of the report, so
// the caller only ever receives a string.

use std::panic::{self, AssertUnwindSafe};

use fontdemo_fs::{Filesystem, Inspection, LocalFs};

// Logger and panic hook setup
pub mod logging;

// JNI exports for MainActivity
#[cfg(target_os = "android")]
pub mod android_jni;

/// Inspect `directory` and render the report shown by the app.
pub fn load_fonts_info(directory: &str) -> String {
    logging::init_logging();
    load_with(&LocalFs, directory)
}

fn load_with(fs: &dyn Filesystem, directory: &str) -> String {
    log::info!("Inspecting directory: {}", directory);

    let inspection = match panic::catch_unwind(AssertUnwindSafe(|| {
        fontdemo_fs::inspect_dir(fs, directory)
    })) {
        Ok(inspection) => inspection,
        Err(e) => {
            let msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("Panic while inspecting {}: {}", directory, msg);
            Inspection::Failed {
                error: anyhow::anyhow!("panic: {}", msg),
            }
        }
    };

    log::info!("Inspection of {} finished: {}", directory, inspection.label());
    inspection.render()
}
