//! libcurl transport (easy interface, one handle per GET).

use super::{Transport, TransportOptions};
use crate::error::TransportError;
use std::io::{self, Write};

#[derive(Debug, Clone)]
pub struct CurlTransport {
    opts: TransportOptions,
}

impl CurlTransport {
    pub fn new(opts: TransportOptions) -> Self {
        Self { opts }
    }
}

impl Transport for CurlTransport {
    fn name(&self) -> &'static str {
        "curl"
    }

    fn get(&self, url: &str, sink: &mut dyn Write) -> Result<u32, TransportError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(self.opts.follow_redirects)?;

        let mut sink_err: Option<io::Error> = None;
        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match sink.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    sink_err = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            let res = transfer.perform();
            res
        };

        // A sink failure surfaces from curl as a generic write error; report the cause.
        if let Some(e) = sink_err {
            return Err(TransportError::Io(e));
        }
        performed?;

        Ok(easy.response_code()?)
    }
}
