use clap::ValueEnum;
use synth_extractor::DetailLevel;

use crate::render::OutputFormat;

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub(crate) enum DetailFlag {
    Brief,
    #[default]
    Standard,
    Detailed,
}

impl DetailFlag {
    pub(crate) const fn as_domain(self) -> DetailLevel {
        match self {
            DetailFlag::Brief => DetailLevel::Brief,
            DetailFlag::Standard => DetailLevel::Standard,
            DetailFlag::Detailed => DetailLevel::Detailed,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub(crate) enum FormatFlag {
    #[default]
    Markdown,
    Json,
    Text,
}

impl FormatFlag {
    pub(crate) const fn as_domain(self) -> OutputFormat {
        match self {
            FormatFlag::Markdown => OutputFormat::Markdown,
            FormatFlag::Json => OutputFormat::Json,
            FormatFlag::Text => OutputFormat::Text,
        }
    }
}
