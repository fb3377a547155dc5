// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io::Write;

use countdown::{Error, Frame, Renderer};

/// A [`Renderer`] that writes every frame as one line of JSON.
#[derive(Debug)]
pub struct JsonLines<W> {
    out: W,
}

impl<W: Write + Send> JsonLines<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Renderer for JsonLines<W> {
    fn render(&mut self, frame: &Frame) -> countdown::Result<()> {
        serde_json::to_writer(&mut self.out, frame).map_err(Error::render)?;

        self.out
            .write_all(b"\n")
            .and_then(|()| self.out.flush())
            .map_err(Error::render)
    }
}
