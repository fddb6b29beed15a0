use anyhow::Error;
use clap::Parser;

use hashface_config::Config;
use hashface_core::{
    colors::{PrimarySource, ResolvedColors},
    palette::color_to_hex,
    pattern::Stencil,
    BackgroundStyle,
    ColorModel,
    Identicon,
};
use hashface_utils::hashes::digest_to_hex;

use crate::cli::{ColorModelArg, DigestInput, ThemeArg};

fn format_stencil(stencil: &Stencil) -> String {
    let mut output = String::new();
    for (primary_row, secondary_row) in stencil.primary.iter().zip(stencil.secondary.iter()) {
        for (primary, secondary) in primary_row.iter().zip(secondary_row.iter()) {
            let cell = match (*primary, *secondary) {
                (true, _) => '#',
                (false, true) => '+',
                (false, false) => '.',
            };
            output.push(cell);
        };
        output.push('\n');
    };
    output
}

fn format_report(
    digest: &[u8],
    model: ColorModel,
    colors: &ResolvedColors,
    stencil: &Stencil,
) -> String {
    let source = match colors.primary_source {
        PrimarySource::Procedural => "procedural",
        PrimarySource::Palette => "palette",
    };
    let mut report = String::new();
    report.push_str(&format!("digest: {}\n", digest_to_hex(digest)));
    report.push_str(&format!("color model: {:?}\n", model));
    report.push_str(&format!("primary index: {}\n", colors.selection.primary_index));
    report.push_str(&format!("secondary index: {}\n", colors.selection.secondary_index));
    report.push_str(&format!("background variant: {}\n", colors.selection.background_variant));
    report.push_str(&format!("primary color: {} ({})\n", color_to_hex(&colors.primary), source));
    report.push_str(&format!("secondary color: {}\n", color_to_hex(&colors.secondary)));
    report.push_str(&format!("background color: {}\n", color_to_hex(&colors.background)));
    report.push_str(&format_stencil(stencil));
    report
}

/// Show selectors, colors and pattern derived from a digest
#[derive(Parser)]
pub struct Inspect {
    #[command(flatten)]
    input: DigestInput,
    #[arg(long, value_enum)]
    model: Option<ColorModelArg>,
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,
}

impl Inspect {
    fn report(&self, config: &Config) -> Result<String, Error> {
        let digest = self.input.digest()?;
        let model = self.model.map(ColorModel::from).unwrap_or(config.color_model);
        let theme = self.theme.map(Into::into).unwrap_or(config.theme);
        let identicon = Identicon::with_model(&digest, model);
        let colors = identicon.colors(BackgroundStyle::Theme(theme));
        Ok(format_report(&digest, model, &colors, &identicon.stencil()))
    }

    pub fn execute(&self, config: &Config) -> Result<(), Error> {
        let report = self.report(config)?;
        print!("{report}");
        Ok(())
    }
}
