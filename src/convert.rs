//! Load-then-save pipeline behind the `imgconv` binary.

use std::path::{Path, PathBuf};

use crate::error::{CodecError, ErrorKind};
use crate::format::{Codec, EncodeOptions, Format};
use crate::limits::Limits;

/// Why a conversion failed. Each variant has its own process exit code.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("unknown format of the input file: {}", .0.display())]
    UnknownInputFormat(PathBuf),

    #[error("unknown format of the output file: {}", .0.display())]
    UnknownOutputFormat(PathBuf),

    #[error("loading failed: {0}")]
    Load(#[source] CodecError),

    #[error("saving failed: {0}")]
    Save(#[source] CodecError),
}

impl ConvertError {
    /// 2 unknown input, 3 unknown output, 4 load, 5 save. (1 is a usage error.)
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownInputFormat(_) => 2,
            Self::UnknownOutputFormat(_) => 3,
            Self::Load(_) => 4,
            Self::Save(_) => 5,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownInputFormat(_) | Self::UnknownOutputFormat(_) => {
                ErrorKind::UnresolvedFormat
            }
            Self::Load(err) | Self::Save(err) => err.kind(),
        }
    }
}

/// Summary of a finished conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Converted {
    pub from: Format,
    pub to: Format,
    pub width: u32,
    pub height: u32,
}

/// Convert one file into another, formats chosen by extension.
///
/// ```no_run
/// use imgconv::ConvertRequest;
///
/// ConvertRequest::new("in.jpg", "out.bmp").run()?;
/// # Ok::<(), imgconv::ConvertError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ConvertRequest<'a> {
    input: &'a Path,
    output: &'a Path,
    limits: Option<&'a Limits>,
    options: EncodeOptions,
}

impl<'a> ConvertRequest<'a> {
    pub fn new(
        input: &'a (impl AsRef<Path> + ?Sized),
        output: &'a (impl AsRef<Path> + ?Sized),
    ) -> Self {
        Self {
            input: input.as_ref(),
            output: output.as_ref(),
            limits: None,
            options: EncodeOptions::default(),
        }
    }

    /// Limits applied while decoding the input.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.options.jpeg_quality = quality;
        self
    }

    /// Resolve both formats (before any I/O), load, save.
    ///
    /// An input that decodes to an image with no pixels counts as a load
    /// failure; nothing is written.
    pub fn run(&self) -> Result<Converted, ConvertError> {
        let reader = codec_for(self.input)
            .ok_or_else(|| ConvertError::UnknownInputFormat(self.input.to_path_buf()))?;
        let writer = codec_for(self.output)
            .ok_or_else(|| ConvertError::UnknownOutputFormat(self.output.to_path_buf()))?;

        let image = reader
            .try_load(self.input, self.limits)
            .map_err(ConvertError::Load)?;
        if image.is_empty() {
            return Err(ConvertError::Load(CodecError::EmptyImage));
        }
        writer
            .try_save(self.output, &image, &self.options)
            .map_err(ConvertError::Save)?;

        log::info!(
            "converted {} ({:?}) to {} ({:?}), {}x{}",
            self.input.display(),
            reader,
            self.output.display(),
            writer,
            image.width(),
            image.height()
        );
        Ok(Converted {
            from: reader.format(),
            to: writer.format(),
            width: image.width(),
            height: image.height(),
        })
    }
}

fn codec_for(path: &Path) -> Option<Codec> {
    Format::from_path(path).codec()
}
