mod cli;

use cli::{CommandLine, Commands};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use serde::Serialize;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use vlsm_subnet_calc::config::Config;
use vlsm_subnet_calc::models::{netmask_for_prefix, AllocationResult};
use vlsm_subnet_calc::output::{
    allocation_rows, error_line, header, host_rows, note_line, partition_rows, AllocationReport,
    HostReport, PartitionReport,
};
use vlsm_subnet_calc::{plan, SubnetError};

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let commands = CommandLine::parse_args();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", error_line(&e.to_string()));
            return ExitCode::FAILURE;
        }
    };
    if let Some(max_blocks) = commands.max_blocks {
        config.max_blocks = max_blocks;
    }
    if let Some(max_hosts) = commands.max_hosts {
        config.max_hosts = max_hosts;
    }

    if let Err(e) = init_logging(&config.log_config) {
        eprintln!("{}", error_line(&e.to_string()));
        return ExitCode::FAILURE;
    }
    log::info!("#Start main() {config:?}");

    match run(commands.command, commands.json, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::warn!("calculation failed: {e}");
            eprintln!("{}", error_line(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

/// log4rs from the YAML file if it exists, otherwise warnings to stderr.
fn init_logging(log_config: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(log_config).exists() {
        return log4rs::init_file(log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {log_config}: {e}").into());
    }

    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let fallback = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(fallback)?;
    log::debug!("{log_config} not found, logging warnings to stderr");
    Ok(())
}

fn run(command: Commands, json: bool, config: &Config) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Classify { address } => {
            let (class, prefix) = vlsm_subnet_calc::classify(&address)?;
            if json {
                print_json(&serde_json::json!({
                    "address": address,
                    "class": class,
                    "default_prefix": prefix,
                }))?;
            } else {
                println!("{address}: class {class}, default prefix /{prefix}");
            }
        }
        Commands::Mask { hosts } => {
            let hosts: i64 = hosts
                .trim()
                .parse()
                .map_err(|_| SubnetError::InvalidHostCount(hosts.clone()))?;
            let prefix = vlsm_subnet_calc::minimal_prefix_for(hosts)?;
            let netmask = netmask_for_prefix(prefix)?;
            if json {
                print_json(&serde_json::json!({
                    "hosts": hosts,
                    "prefix": prefix,
                    "netmask": netmask,
                }))?;
            } else {
                println!("{hosts} hosts: /{prefix} ({netmask})");
            }
        }
        Commands::Vlsm { base, hosts } => {
            let result = vlsm_subnet_calc::allocate_vlsm_text(&base, &hosts)?;
            print_allocation(&result, json)?;
        }
        Commands::Plan { file } => {
            let plan = plan::read_plan(&file)?;
            let result = plan.allocate()?;
            print_allocation(&result, json)?;
        }
        Commands::Subnets { base, mask } => {
            let partition = vlsm_subnet_calc::partition_fixed(&base, &mask, config.max_blocks)?;
            log::info!(
                "partitioned {} into {} of {} blocks",
                partition.parent,
                partition.subnets.len(),
                partition.total_blocks
            );
            if json {
                print_json(&PartitionReport::from(&partition))?;
            } else {
                println!("{}", header(&format!("Subnets of {}", partition.parent)));
                print_rows(partition_rows(&partition));
                if partition.truncated {
                    println!(
                        "{}",
                        note_line(&format!(
                            "Listed {} of {} subnets, raise --max-blocks to see more",
                            partition.subnets.len(),
                            partition.total_blocks
                        ))
                    );
                }
            }
        }
        Commands::Hosts { base, mask } => {
            let summary = vlsm_subnet_calc::enumerate_hosts(&base, &mask, config.max_hosts)?;
            if json {
                print_json(&HostReport::from(&summary))?;
            } else {
                println!("{}", header(&format!("Hosts of {}", summary.block)));
                print_rows(host_rows(&summary));
                if summary.truncated {
                    println!(
                        "{}",
                        note_line(&format!(
                            "Listed {} of {} hosts, raise --max-hosts to see more",
                            summary.hosts.len(),
                            summary.total_hosts
                        ))
                    );
                }
            }
        }
        Commands::Convert { address, radix } => {
            let converted = vlsm_subnet_calc::reformat(&address, radix)?;
            if json {
                print_json(&serde_json::json!({
                    "address": address,
                    "radix": radix,
                    "result": converted,
                }))?;
            } else {
                println!("{converted}");
            }
        }
    }
    Ok(())
}

fn print_allocation(result: &AllocationResult, json: bool) -> Result<(), Box<dyn Error>> {
    log::info!(
        "allocated {} subnets for {} requested (excluded={}, skipped={}, unserved={})",
        result.count(),
        result.requested,
        result.excluded,
        result.skipped,
        result.unserved
    );
    if json {
        return print_json(&AllocationReport::from(result));
    }

    println!("{}", header("VLSM subnets"));
    print_rows(allocation_rows(result));
    println!(
        "# {} subnets, {} usable hosts in total",
        result.count(),
        result.total_capacity()
    );
    if result.excluded > 0 || result.skipped > 0 {
        println!(
            "{}",
            note_line(&format!(
                "Ignored {} invalid and {} oversized host counts",
                result.excluded, result.skipped
            ))
        );
    }
    if let (true, Some(last)) = (result.exhausted(), result.subnets.last()) {
        let exhausted = SubnetError::AddressSpaceExhausted(last.broadcast);
        println!(
            "{}",
            note_line(&format!("{exhausted}, {} requests unserved", result.unserved))
        );
    }
    Ok(())
}

fn print_rows(rows: Vec<String>) {
    for row in rows {
        println!("{row}");
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
