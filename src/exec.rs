use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use log::debug;
use wait_timeout::ChildExt;

use crate::error::Error;

/// Run an external converter to completion, discarding stdout and capturing
/// stderr for error reporting. With a timeout, a run that exceeds it is
/// killed and reported as `Error::Timeout`.
pub(crate) fn run_tool(mut cmd: Command, timeout: Option<Duration>) -> Result<(), Error> {
    debug!("running {cmd:?}");
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::ToolNotFound(PathBuf::from(cmd.get_program()))
        } else {
            Error::Io(e)
        }
    })?;

    // Drain stderr on a separate thread so a chatty tool cannot fill the
    // pipe and block before we wait on it.
    let stderr_pipe = child.stderr.take();
    let stderr_reader = thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut pipe) = stderr_pipe {
            let _ = pipe.read_to_string(&mut buf);
        }
        buf
    });

    let status = match timeout {
        Some(limit) => match child.wait_timeout(limit)? {
            Some(status) => status,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(Error::Timeout(limit));
            }
        },
        None => child.wait()?,
    };

    let stderr = stderr_reader.join().unwrap_or_default();

    if !status.success() {
        return Err(Error::ToolFailed {
            status: status.code(),
            stderr,
        });
    }
    Ok(())
}
