//! Captures `log` records so tests can assert on them.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;

use log::Level;

/// A formatted record: level, target, message.
pub type Line = (Level, String, String);

#[derive(Clone, Default)]
struct Sink(Arc<Mutex<Vec<u8>>>);

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn sink() -> &'static Sink {
    static SINK: OnceLock<Sink> = OnceLock::new();
    SINK.get_or_init(|| {
        let sink = Sink::default();
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Trace)
            .write_style(env_logger::WriteStyle::Never)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{:?}\t{}\t{}\t{}",
                    thread::current().id(),
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .target(env_logger::Target::Pipe(Box::new(sink.clone())))
            .init();
        sink
    })
}

/// Runs `f` and returns the records it logged on this thread.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<Line>) {
    let sink = sink();
    let start = sink.0.lock().unwrap().len();
    let result = f();
    let bytes = sink.0.lock().unwrap()[start..].to_vec();
    let thread = format!("{:?}", thread::current().id());
    let lines = String::from_utf8(bytes)
        .unwrap()
        .lines()
        .filter_map(|line| {
            let mut fields = line.splitn(4, '\t');
            if fields.next()? != thread {
                return None;
            }
            let level = fields.next()?.parse().ok()?;
            let target = fields.next()?.to_string();
            let message = fields.next()?.to_string();
            Some((level, target, message))
        })
        .collect();
    (result, lines)
}
