use sapp_jsutils::JsObject;

use super::KvStore;

mod imports {
    use sapp_jsutils::JsObject;

    // Provided by `web/quad_storage.js`.
    unsafe extern "C" {
        pub fn quad_storage_get(key: JsObject) -> JsObject;
        pub fn quad_storage_set(key: JsObject, value: JsObject) -> bool;
    }
}

/// The browser's `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl KvStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let value = unsafe { imports::quad_storage_get(JsObject::string(key)) };
        if value.is_nil() {
            return None;
        }

        let mut buf = String::new();
        value.to_string(&mut buf);
        Some(buf)
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let ok = unsafe {
            imports::quad_storage_set(JsObject::string(key), JsObject::string(value))
        };
        if !ok {
            anyhow::bail!("localStorage refused to store {key:?}");
        }

        Ok(())
    }
}
