//! Android clipboard backend over the `ClipboardManager` system service.

use std::sync::OnceLock;

use jni::objects::{GlobalRef, JObject, JString, JValue};
use jni::{JNIEnv, JavaVM};

use crate::ClipboardError;
use crate::backend::ClipboardBackend;
use crate::text;

static JAVA_VM: OnceLock<JavaVM> = OnceLock::new();
static CONTEXT: OnceLock<GlobalRef> = OnceLock::new();

/// Initialize the backend with the application `Context`.
///
/// Must be called once from the embedding application (e.g. in
/// `JNI_OnLoad` or the activity startup path) before the clipboard is used;
/// until then backend selection degrades to noop.
///
/// # Errors
/// Returns a description of the JNI failure, if any.
pub fn init_with_context(env: &mut JNIEnv<'_>, context: &JObject<'_>) -> Result<(), String> {
    if CONTEXT.get().is_some() {
        return Ok(());
    }
    let vm = env
        .get_java_vm()
        .map_err(|e| format!("JNI error get_java_vm: {e}"))?;
    let global = env
        .new_global_ref(context)
        .map_err(|e| format!("JNI error new_global_ref: {e}"))?;
    let _ = JAVA_VM.set(vm);
    let _ = CONTEXT.set(global);
    Ok(())
}

pub(crate) fn construct() -> Result<Box<dyn ClipboardBackend>, ClipboardError> {
    if CONTEXT.get().is_none() {
        return Err(ClipboardError::Unavailable(
            "init_with_context has not been called".into(),
        ));
    }
    Ok(Box::new(AndroidBackend))
}

#[derive(Debug)]
pub(crate) struct AndroidBackend;

fn with_env<T>(
    f: impl FnOnce(&mut JNIEnv<'_>, &JObject<'_>) -> jni::errors::Result<T>,
) -> Result<T, ClipboardError> {
    let vm = JAVA_VM
        .get()
        .ok_or_else(|| ClipboardError::Unavailable("Java VM not initialized".into()))?;
    let context = CONTEXT
        .get()
        .ok_or_else(|| ClipboardError::Unavailable("application context not initialized".into()))?;
    let mut guard = vm
        .attach_current_thread()
        .map_err(|e| ClipboardError::Platform(format!("JNI error attach_current_thread: {e}")))?;
    f(&mut guard, context.as_obj()).map_err(|e| ClipboardError::Platform(format!("JNI error: {e}")))
}

fn clipboard_manager<'local>(
    env: &mut JNIEnv<'local>,
    context: &JObject<'_>,
) -> jni::errors::Result<JObject<'local>> {
    let service = env.new_string("clipboard")?;
    env.call_method(
        context,
        "getSystemService",
        "(Ljava/lang/String;)Ljava/lang/Object;",
        &[JValue::Object(&service)],
    )?
    .l()
}

fn primary_clip_text(env: &mut JNIEnv<'_>, context: &JObject<'_>) -> jni::errors::Result<Option<String>> {
    let manager = clipboard_manager(env, context)?;
    let clip = env
        .call_method(&manager, "getPrimaryClip", "()Landroid/content/ClipData;", &[])?
        .l()?;
    if clip.is_null() {
        return Ok(None);
    }
    let count = env.call_method(&clip, "getItemCount", "()I", &[])?.i()?;
    if count == 0 {
        return Ok(None);
    }
    let item = env
        .call_method(
            &clip,
            "getItemAt",
            "(I)Landroid/content/ClipData$Item;",
            &[JValue::Int(0)],
        )?
        .l()?;
    let chars = env
        .call_method(
            &item,
            "coerceToText",
            "(Landroid/content/Context;)Ljava/lang/CharSequence;",
            &[JValue::Object(context)],
        )?
        .l()?;
    if chars.is_null() {
        return Ok(None);
    }
    let string = env
        .call_method(&chars, "toString", "()Ljava/lang/String;", &[])?
        .l()?;
    let contents: String = env.get_string(&JString::from(string))?.into();
    Ok(Some(contents))
}

impl ClipboardBackend for AndroidBackend {
    fn name(&self) -> &'static str {
        "android"
    }

    fn get(&mut self, mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        if !text::is_text_mime(mime_type) {
            return Ok(None);
        }
        let contents = with_env(primary_clip_text)?;
        Ok(contents
            .filter(|contents| !contents.is_empty())
            .map(String::into_bytes))
    }

    fn put(&mut self, data: &[u8], mime_type: &str) -> Result<(), ClipboardError> {
        if !text::is_text_mime(mime_type) {
            return Err(ClipboardError::Platform(format!(
                "android backend cannot store {mime_type}"
            )));
        }
        let contents = text::NATIVE.decode(data);
        with_env(move |env, context| {
            let manager = clipboard_manager(env, context)?;
            let label = env.new_string("plumekit")?;
            let value = env.new_string(&contents)?;
            let clip = env
                .call_static_method(
                    "android/content/ClipData",
                    "newPlainText",
                    "(Ljava/lang/CharSequence;Ljava/lang/CharSequence;)Landroid/content/ClipData;",
                    &[JValue::Object(&label), JValue::Object(&value)],
                )?
                .l()?;
            env.call_method(
                &manager,
                "setPrimaryClip",
                "(Landroid/content/ClipData;)V",
                &[JValue::Object(&clip)],
            )?;
            Ok(())
        })
    }

    fn get_types(&mut self) -> Vec<String> {
        let has_clip = with_env(|env, context| {
            let manager = clipboard_manager(env, context)?;
            env.call_method(&manager, "hasPrimaryClip", "()Z", &[])?.z()
        });
        match has_clip {
            Ok(true) => vec![text::PLAIN_TEXT.to_string()],
            _ => Vec::new(),
        }
    }
}
