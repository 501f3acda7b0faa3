use std::io::{self, Write};

/// Stdout writers that treat a closed pipe as success. A consumer such as
/// `head` may drop the read end mid-stream; the contract is to stop quietly,
/// not to fail the command.
pub fn write_stdout_text(text: &str) -> io::Result<()> {
    emit(text, false)
}

pub fn write_stdout_line(text: &str) -> io::Result<()> {
    emit(text, true)
}

fn emit(text: &str, newline: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    forward(&mut stdout, text, newline)
}

fn forward<W>(writer: &mut W, text: &str, newline: bool) -> io::Result<()>
where
    W: Write,
{
    let written = if newline {
        writeln!(writer, "{text}")
    } else {
        write!(writer, "{text}")
    }
    .and_then(|()| writer.flush());

    match written {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
