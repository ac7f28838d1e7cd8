//! Pure-Rust transport backed by a `ureq` agent.

use super::{Transport, TransportOptions};
use crate::error::TransportError;
use std::io::{self, Write};

const MAX_REDIRECTS: u32 = 10;

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(opts: TransportOptions) -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .max_redirects(if opts.follow_redirects { MAX_REDIRECTS } else { 0 })
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
        }
    }
}

impl Transport for UreqTransport {
    fn name(&self) -> &'static str {
        "ureq"
    }

    fn get(&self, url: &str, sink: &mut dyn Write) -> Result<u32, TransportError> {
        let mut response = self.agent.get(url).call()?;
        let status = u32::from(response.status().as_u16());
        io::copy(&mut response.body_mut().as_reader(), sink)?;
        Ok(status)
    }
}
