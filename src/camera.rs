//! Camera collaborator and the directory-backed replay camera.

use derive_getters::Getters;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// A single captured frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct Frame {
    /// Where the frame came from (file name, device name).
    source: String,
    /// Raw frame payload, interpreted by the landmark detector.
    bytes: Vec<u8>,
}

/// Exclusive frame source.
///
/// `open` and `read_frame` report failure as values so the round can
/// distinguish "no camera" from "bad frame".
pub trait Camera {
    /// Opens the device. Returns false if it is unavailable.
    fn open(&mut self) -> bool;

    /// Reads one frame from an opened device.
    fn read_frame(&mut self) -> Option<Frame>;

    /// Releases the device.
    fn release(&mut self);
}

/// An opened camera, released when dropped.
pub struct OpenCamera<'a, C: Camera + ?Sized> {
    camera: &'a mut C,
}

impl<'a, C: Camera + ?Sized> OpenCamera<'a, C> {
    /// Opens `camera`, or returns `None` if it is unavailable.
    #[instrument(skip_all)]
    pub fn open(camera: &'a mut C) -> Option<Self> {
        if camera.open() {
            Some(Self { camera })
        } else {
            None
        }
    }

    /// Reads one frame.
    pub fn read_frame(&mut self) -> Option<Frame> {
        self.camera.read_frame()
    }
}

impl<C: Camera + ?Sized> Drop for OpenCamera<'_, C> {
    fn drop(&mut self) {
        debug!("Releasing camera");
        self.camera.release();
    }
}

/// Camera that replays capture files from a directory.
///
/// Files are served in name order, one per read, wrapping around at the
/// end. Successive rounds therefore step through the captures.
#[derive(Debug, Clone)]
pub struct ReplayCamera {
    dir: PathBuf,
    files: Vec<PathBuf>,
    cursor: usize,
    opened: bool,
}

impl ReplayCamera {
    /// Creates a replay camera over `dir`. Nothing is read until `open`.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            files: Vec::new(),
            cursor: 0,
            opened: false,
        }
    }

    fn scan(&self) -> std::io::Result<Vec<PathBuf>> {
        let mut files = std::fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect::<Vec<_>>();
        files.sort();
        Ok(files)
    }
}

impl Camera for ReplayCamera {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn open(&mut self) -> bool {
        match self.scan() {
            Ok(files) if files.is_empty() => {
                warn!("Capture directory is empty");
                false
            }
            Ok(files) => {
                info!(captures = files.len(), "Replay camera opened");
                self.cursor %= files.len();
                self.files = files;
                self.opened = true;
                true
            }
            Err(e) => {
                warn!(error = %e, "Capture directory unavailable");
                false
            }
        }
    }

    #[instrument(skip(self), fields(cursor = self.cursor))]
    fn read_frame(&mut self) -> Option<Frame> {
        if !self.opened {
            warn!("Read from a camera that is not open");
            return None;
        }
        let path = self.files.get(self.cursor)?.clone();
        self.cursor = (self.cursor + 1) % self.files.len();

        match std::fs::read(&path) {
            Ok(bytes) => {
                let source = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                debug!(%source, bytes = bytes.len(), "Frame captured");
                Some(Frame::new(source, bytes))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read capture");
                None
            }
        }
    }

    fn release(&mut self) {
        self.opened = false;
        self.files.clear();
    }
}
