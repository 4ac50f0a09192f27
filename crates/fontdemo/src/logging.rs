use std::sync::Once;

static INIT: Once = Once::new();

#[cfg(feature = "debug-logs")]
const MAX_LEVEL: log::LevelFilter = log::LevelFilter::Debug;
#[cfg(not(feature = "debug-logs"))]
const MAX_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// Initialize logging and the panic hook, once per process.
///
/// On Android records go to logcat under the `fontdemo` tag. Elsewhere the
/// embedding binary owns the logger; only the panic hook is installed here.
pub fn init_logging() {
    INIT.call_once(|| {
        #[cfg(target_os = "android")]
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(MAX_LEVEL)
                .with_tag("fontdemo"),
        );

        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let payload = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "Unknown panic".to_string());

            let location = info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown".to_string());

            log::error!("PANIC at {}: {}", location, payload);
            previous(info);
        }));

        log::debug!("fontdemo logging initialized (max level {})", MAX_LEVEL);
    });
}
