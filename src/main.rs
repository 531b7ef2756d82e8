use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use structopt::StructOpt;
use tracing::{info, warn};

use dispensekit::{
    drill, init_logging, validate, DispenseGenerator, PanelParams, Panelizer, ParameterStore,
};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dispensekit",
    about = "Plan a solder dispensing run from a PCB drill file"
)]
struct Opt {
    /// Drill file listing the hole coordinates (Excellon subset)
    #[structopt(parse(from_os_str))]
    drill_file: PathBuf,

    /// Output file for the generated G-code program
    #[structopt(short, long, parse(from_os_str))]
    output: PathBuf,

    /// Parameter file (.json or .toml); defaults to the per-user store
    #[structopt(short, long, parse(from_os_str))]
    params: Option<PathBuf>,

    /// Write the parameters back to the per-user store after validation
    #[structopt(long)]
    save_params: bool,
}

fn main() -> Result<()> {
    init_logging()?;
    let opt = Opt::from_args();

    // Explicit parameter files must load; the per-user store is optional.
    let store = match &opt.params {
        Some(path) => ParameterStore::load_from_file(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?,
        None => ParameterStore::load_default().unwrap_or_else(|err| {
            info!("using built-in parameter defaults ({err})");
            ParameterStore::new()
        }),
    };
    let params = store.parameters().clone();

    let contents = fs::read_to_string(&opt.drill_file)
        .with_context(|| format!("failed to read drill file {}", opt.drill_file.display()))?;
    let drill_file = drill::parse(&contents);
    info!(
        "parsed {} holes from {} ({})",
        drill_file.len(),
        opt.drill_file.display(),
        drill_file.units
    );

    let report = validate(&params, drill_file.extent());
    if !report.is_valid() {
        for (field, message) in report.failures() {
            warn!("{field}: {message}");
        }
        bail!("parameter validation failed, adjust the parameter file and retry");
    }

    if opt.save_params {
        store
            .save_default()
            .context("failed to persist parameters")?;
        info!("parameters saved to per-user store");
    }

    let panel = PanelParams::from_parameters(&params);
    let points = Panelizer::replicate(&drill_file.points, &panel);
    info!(
        "replicated {} points across {} boards",
        points.len(),
        panel.total_boards()
    );

    let gcode = DispenseGenerator::new(params).generate(&points);
    fs::write(&opt.output, &gcode)
        .with_context(|| format!("failed to write program to {}", opt.output.display()))?;
    info!("wrote dispense program to {}", opt.output.display());

    Ok(())
}
