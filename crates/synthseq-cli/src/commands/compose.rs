use crate::cli::ComposeArgs;
use crate::error::Result;
use std::fmt::Write;
use synthseq::core::composition::resolver::{Composition, resolve_composition};
use synthseq::core::models::amino_acid::ChargeClass;
use tracing::info;

pub fn run(args: ComposeArgs) -> Result<()> {
    info!(
        "Resolving composition for f_positive = {}, f_negative = {}, length = {}",
        args.positive, args.negative, args.length
    );
    let composition = resolve_composition(args.positive, args.negative, args.length)?;

    println!(
        "Composition for f_positive = {}, f_negative = {}, length = {}",
        args.positive, args.negative, args.length
    );
    print!("{}", render_composition(&composition));
    println!("Canonical order: {}", composition.to_sequence_string());
    Ok(())
}

pub fn render_composition(composition: &Composition) -> String {
    let mut out = String::new();
    for class in ChargeClass::ALL {
        let counts = composition.class(class);
        let _ = write!(out, "  {:<9}{:>4}:", class.name(), counts.total());
        for (aa, n) in counts.iter() {
            let _ = write!(out, " {}={}", aa, n);
        }
        out.push('\n');
    }
    out
}
