use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use icon_core::models::observations::{
    BuccalOcclusion, CrossbiteSeverity, UpperArchDiscrepancy, VerticalRelationship,
};
use icon_core::models::selections::ObservationSelections;
use icon_export::render::ReportFormat;

#[derive(Parser, Debug)]
#[command(name = "icon")]
#[command(about = "ICON orthodontic treatment-need scorer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "ICON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one assessment
    Score {
        /// JSON file with form selections; flags override its values
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        observations: ObservationArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Score the demonstration case
    Demo {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the Dental Aesthetic Component scale
    DacScale,

    /// Show the ICON interpretation guide
    Guide,

    /// List the weighted components and their point ranges
    Components,

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective config
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the config file location
    Path,
}

/// Clinical observations. Categories accept a key (none, minor, major,
/// normal) or the form label.
#[derive(Args, Debug, Default)]
pub struct ObservationArgs {
    /// Dental Aesthetic Component grade (1-10)
    #[arg(long)]
    pub dac: Option<u8>,

    /// Crossbite: none, minor (≤1mm RCP-ICP), major (>1mm RCP-ICP)
    #[arg(long)]
    pub crossbite: Option<CrossbiteSeverity>,

    /// Posterior lingual crossbite with no functional contact
    #[arg(long)]
    pub lingual_crossbite: bool,

    /// Upper arch crowding/spacing: none, minor (≤3mm), major (>3mm)
    #[arg(long)]
    pub upper_arch: Option<UpperArchDiscrepancy>,

    /// Impacted teeth (except third molars)
    #[arg(long)]
    pub impacted: bool,

    /// Supernumerary teeth
    #[arg(long)]
    pub supernumerary: bool,

    /// Submerged deciduous teeth
    #[arg(long)]
    pub submerged: bool,

    /// Extensive hypodontia (more than one tooth per quadrant)
    #[arg(long)]
    pub hypodontia: bool,

    /// Worst buccal segment: normal, minor (≤1/2 unit), major (>1/2 unit)
    #[arg(long)]
    pub buccal: Option<BuccalOcclusion>,

    /// Anterior vertical relationship: normal, minor, major
    #[arg(long)]
    pub vertical: Option<VerticalRelationship>,

    /// Extreme lateral openbite (>4mm)
    #[arg(long)]
    pub lateral_openbite: bool,
}

impl ObservationArgs {
    pub fn to_selections(&self) -> ObservationSelections {
        ObservationSelections {
            dac_grade: self.dac,
            crossbite: self.crossbite,
            lingual_crossbite_no_contact: self.lingual_crossbite,
            upper_arch: self.upper_arch,
            impacted_teeth: self.impacted,
            supernumerary_teeth: self.supernumerary,
            submerged_deciduous: self.submerged,
            extensive_hypodontia: self.hypodontia,
            buccal_occlusion: self.buccal,
            vertical_relationship: self.vertical,
            extreme_lateral_openbite: self.lateral_openbite,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Output format: text, markdown, json (defaults to the config value)
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also export the report as a DOCX document
    #[arg(long)]
    pub docx: Option<PathBuf>,
}
