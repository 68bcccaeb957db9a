use clap::{Parser, Subcommand};
use vlsm_subnet_calc::models::Radix;

#[derive(Parser)]
#[command(name = "subnet-calc")]
#[command(about = "IPv4 subnet calculator: VLSM, fixed-length subnetting and host lists.")]
pub struct CommandLine {
    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Most subnets listed by `subnets` (overrides SUBNET_CALC_MAX_BLOCKS)
    #[arg(long, global = true)]
    pub max_blocks: Option<usize>,

    /// Most hosts listed by `hosts` (overrides SUBNET_CALC_MAX_HOSTS)
    #[arg(long, global = true)]
    pub max_hosts: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the class and default prefix of an address
    #[command(alias = "c")]
    Classify { address: String },
    /// Smallest mask that holds a number of hosts
    #[command(alias = "m")]
    Mask {
        #[arg(allow_hyphen_values = true)]
        hosts: String,
    },
    /// Allocate VLSM subnets for comma separated host counts, e.g. 50,20,10
    #[command(alias = "v")]
    Vlsm { base: String, hosts: String },
    /// Allocate VLSM subnets from a JSON plan file
    #[command(alias = "p")]
    Plan { file: String },
    /// Split a network into equal subnets of a prefix (24) or netmask (255.255.255.0)
    #[command(alias = "s")]
    Subnets { base: String, mask: String },
    /// Network, broadcast and usable hosts of a subnet
    #[command(alias = "h")]
    Hosts { base: String, mask: String },
    /// Show an address in decimal, binary or hex
    Convert { address: String, radix: Radix },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
