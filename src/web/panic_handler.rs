use std::{
    fmt::{self, Write},
    panic::PanicHookInfo,
    sync::Mutex,
};

use wasm_bindgen::JsValue;

// Panics may happen while memory is exhausted, so the message is formatted
// into a buffer reserved in static space instead of a fresh String.
const PANIC_BUFFER_LEN: usize = 4096;
type PanicBuffer = [u8; PANIC_BUFFER_LEN];
static PANIC_BUFFER: Mutex<PanicBuffer> = Mutex::new([0; PANIC_BUFFER_LEN]);

const TRUNCATED_MARKER: &str = "[truncated]";

/// Writes into a fixed buffer, cutting off at a char boundary once full.
struct BufferWriter<'a> {
    buffer: &'a mut PanicBuffer,
    len: usize,
    truncated: bool,
}

impl BufferWriter<'_> {
    fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buffer[..self.len]).unwrap_or("[unrecoverable]")
    }
}

impl Write for BufferWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Err(fmt::Error);
        }
        let room = PANIC_BUFFER_LEN - self.len;
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buffer[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        if take < s.len() {
            self.truncated = true;
            return Err(fmt::Error);
        }
        Ok(())
    }
}

pub(super) fn init_panic_handler() {
    std::panic::set_hook(Box::new(handle_panic));
}

fn handle_panic(info: &PanicHookInfo<'_>) {
    let mut buffer = match PANIC_BUFFER.lock() {
        Ok(l) => l,
        Err(p) => p.into_inner(),
    };
    let mut writer = BufferWriter {
        buffer: &mut buffer,
        len: 0,
        truncated: false,
    };

    let _ = write_panic_info(&mut writer, info);

    let message = JsValue::from_str(writer.as_str());
    if writer.truncated {
        web_sys::console::error_2(&message, &JsValue::from_str(TRUNCATED_MARKER));
    } else {
        web_sys::console::error_1(&message);
    }
}

fn write_panic_info(writer: &mut BufferWriter<'_>, info: &PanicHookInfo<'_>) -> fmt::Result {
    writer.write_str("dashboard state panicked at ")?;
    match info.location() {
        Some(l) => write!(writer, "{}:{}:{}", l.file(), l.line(), l.column())?,
        None => writer.write_str("?")?,
    }

    let payload = info.payload();
    if let Some(s) = payload.downcast_ref::<&str>() {
        write!(writer, ":\n{s}")?;
    } else if let Some(s) = payload.downcast_ref::<String>() {
        write!(writer, ":\n{s}")?;
    }
    Ok(())
}
