use std::{path::PathBuf, process};

use anyhow::Result;
use clap::clap_app;
use dio_provision_config::Configuration;
use dio_provision_lib::{
    devices::sequencer::{Request, Sequencer},
    drivers::{fs::HostFilesystem, process::HostProcess, serial::SystemSerial, time::ThreadDelay},
};
use log::error;

struct Arguments {
    configuration: Option<PathBuf>,
    device: Option<PathBuf>,
    firmware: Option<PathBuf>,
    bootloader: Option<PathBuf>,
}

fn run_clap() -> Arguments {
    let matches = clap_app!(app =>
        (name: env!("CARGO_PKG_NAME"))
        (version: env!("CARGO_PKG_VERSION"))
        (about: env!("CARGO_PKG_DESCRIPTION"))
        (@arg config: -c --config +takes_value "RON configuration file overriding the defaults.")
        (@arg device: "Serial device of the board, usually a /dev/serial/by-id link.")
        (@arg firmware: "Application image (Intel hex).")
        (@arg bootloader: "Bootloader image (Intel hex).")
    )
    .get_matches();

    Arguments {
        configuration: matches.value_of("config").map(PathBuf::from),
        device: matches.value_of("device").map(PathBuf::from),
        firmware: matches.value_of("firmware").map(PathBuf::from),
        bootloader: matches.value_of("bootloader").map(PathBuf::from),
    }
}

fn load_configuration(path: Option<PathBuf>) -> Result<Configuration> {
    match path {
        Some(path) => Configuration::from_file(path),
        None => Ok(Configuration::default()),
    }
}

fn build_request(configuration: &Configuration, arguments: Arguments) -> Request {
    let defaults = Request::from_configuration(configuration);
    Request {
        device: arguments.device.unwrap_or(defaults.device),
        firmware: arguments.firmware.unwrap_or(defaults.firmware),
        bootloader: arguments.bootloader.unwrap_or(defaults.bootloader),
    }
}

fn run() -> Result<i32> {
    let mut arguments = run_clap();
    let configuration = load_configuration(arguments.configuration.take())?;
    let request = build_request(&configuration, arguments);

    let mut sequencer = Sequencer::new(
        &configuration,
        HostProcess,
        SystemSerial,
        HostFilesystem,
        ThreadDelay,
    );

    Ok(match sequencer.run(&request) {
        Ok(status) => status.code(),
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let code = run().unwrap_or_else(|e| {
        error!("{:#}", e);
        1
    });
    process::exit(code)
}
