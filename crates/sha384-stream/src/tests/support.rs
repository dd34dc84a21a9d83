// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Readers with scripted misbehaviour.

use std::io::{self, Read};
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::io::{AsyncRead, ReadBuf};

use crate::CancellationFlag;

/// Returns `Interrupted` on every other call
pub(crate) struct InterruptingReader<'a> {
    pub inner: &'a [u8],
    pub interrupt_next: bool,
}

impl Read for InterruptingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt_next = !self.interrupt_next;
        if !self.interrupt_next {
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        self.inner.read(buf)
    }
}

/// Async twin of [`InterruptingReader`]
pub(crate) struct InterruptingAsyncReader<'a> {
    pub inner: &'a [u8],
    pub interrupt_next: bool,
}

impl AsyncRead for InterruptingAsyncReader<'_> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        this.interrupt_next = !this.interrupt_next;
        if !this.interrupt_next {
            return Poll::Ready(Err(io::Error::from(io::ErrorKind::Interrupted)));
        }
        Pin::new(&mut this.inner).poll_read(cx, buf)
    }
}

/// Fails with `BrokenPipe` after `ok_reads` successful reads
pub(crate) struct FailingReader {
    pub ok_reads: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.ok_reads == 0 {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }
        self.ok_reads -= 1;
        buf.fill(0x42);
        Ok(buf.len())
    }
}

/// Endless reader that raises `flag` once `reads_before_cancel` reads are done
pub(crate) struct CancellingReader {
    pub flag: CancellationFlag,
    pub reads_before_cancel: usize,
}

impl Read for CancellingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.reads_before_cancel == 0 {
            self.flag.cancel();
        } else {
            self.reads_before_cancel -= 1;
        }
        buf.fill(0x17);
        Ok(buf.len())
    }
}
