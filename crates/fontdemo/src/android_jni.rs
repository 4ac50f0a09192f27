use jni::{
    JNIEnv,
    objects::{JObject, JString},
    sys::jstring,
};

use crate::logging::init_logging;

/// Build a Java string, falling back to a fixed message and then to null.
fn to_java_string(env: &mut JNIEnv, s: &str) -> jstring {
    match env.new_string(s) {
        Ok(java_string) => java_string.into_raw(),
        Err(e) => {
            log::error!("Failed to create Java string: {:?}", e);
            match env.new_string("字符串转换错误") {
                Ok(fallback) => fallback.into_raw(),
                Err(_) => std::ptr::null_mut(),
            }
        }
    }
}

/// List a directory for the UI
///
/// Called from MainActivity.loadFontsInfo(String). Always returns a string;
/// every failure is described in the returned text.
#[unsafe(no_mangle)]
pub extern "system" fn Java_androidx_appcompat_demo_MainActivity_loadFontsInfo(
    mut env: JNIEnv,
    _activity: JObject,
    directory: JString,
) -> jstring {
    init_logging();

    let directory: String = match env.get_string(&directory) {
        Ok(s) => s.into(),
        Err(e) => {
            log::error!("Failed to get directory string: {:?}", e);
            return to_java_string(&mut env, &format!("参数转换失败: {}", e));
        }
    };

    let report = crate::load_fonts_info(&directory);
    to_java_string(&mut env, &report)
}
