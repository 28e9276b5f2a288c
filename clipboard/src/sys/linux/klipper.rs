//! Klipper clipboard backend over the session D-Bus.
//!
//! Talks to the `org.kde.klipper` service that KDE Plasma runs. Klipper only
//! deals in strings, so this backend answers text mime types exclusively.

use zbus::blocking::Connection;

use crate::ClipboardError;
use crate::backend::ClipboardBackend;
use crate::text;

const SERVICE: &str = "org.kde.klipper";
const PATH: &str = "/klipper";
const INTERFACE: &str = "org.kde.klipper.klipper";

pub(crate) fn construct() -> Result<Box<dyn ClipboardBackend>, ClipboardError> {
    Ok(Box::new(KlipperBackend::new()?))
}

#[derive(Debug)]
pub(crate) struct KlipperBackend {
    connection: Connection,
}

impl KlipperBackend {
    pub(crate) fn new() -> Result<Self, ClipboardError> {
        let connection = Connection::session()
            .map_err(|err| ClipboardError::Unavailable(format!("session bus: {err}")))?;
        let backend = Self { connection };
        // probe the service so selection moves on when Klipper is not running
        backend
            .contents()
            .map_err(|err| ClipboardError::Unavailable(format!("klipper not reachable: {err}")))?;
        Ok(backend)
    }

    fn contents(&self) -> Result<String, zbus::Error> {
        self.connection
            .call_method(
                Some(SERVICE),
                PATH,
                Some(INTERFACE),
                "getClipboardContents",
                &(),
            )?
            .body()
            .deserialize()
    }

    fn set_contents(&self, text: &str) -> Result<(), zbus::Error> {
        self.connection.call_method(
            Some(SERVICE),
            PATH,
            Some(INTERFACE),
            "setClipboardContents",
            &(text,),
        )?;
        Ok(())
    }
}

impl ClipboardBackend for KlipperBackend {
    fn name(&self) -> &'static str {
        "klipper"
    }

    fn get(&mut self, mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        if !text::is_text_mime(mime_type) {
            return Ok(None);
        }
        let contents = self
            .contents()
            .map_err(|err| ClipboardError::Platform(err.to_string()))?;
        if contents.is_empty() {
            return Ok(None);
        }
        Ok(Some(contents.into_bytes()))
    }

    fn put(&mut self, data: &[u8], mime_type: &str) -> Result<(), ClipboardError> {
        if !text::is_text_mime(mime_type) {
            return Err(ClipboardError::Platform(format!(
                "klipper cannot store {mime_type}"
            )));
        }
        let contents = text::NATIVE.decode(data);
        self.set_contents(&contents)
            .map_err(|err| ClipboardError::Platform(err.to_string()))
    }

    fn get_types(&mut self) -> Vec<String> {
        match self.contents() {
            Ok(contents) if !contents.is_empty() => {
                vec![text::UTF8_TEXT.to_string(), text::PLAIN_TEXT.to_string()]
            }
            _ => Vec::new(),
        }
    }
}
