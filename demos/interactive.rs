// SPDX-License-Identifier: MPL-2.0

//! Test program: interactively control a Govee device from the terminal.
//!
//! # Usage
//!
//! ```bash
//! GOVEE_API_KEY=<key> cargo run --example interactive
//! ```
//!
//! Lists the account's devices, lets you pick one, then offers a menu of
//! commands (refresh, on/off, color, color temperature, brightness).

use std::io::{self, Write};
use std::sync::Arc;

use govee_lib::types::{Brightness, Kelvin, Rgb};
use govee_lib::{ApiConfig, Device, GoveeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!();
            eprintln!("Set your API key first:");
            eprintln!("  GOVEE_API_KEY=<key> cargo run --example interactive");
            std::process::exit(1);
        }
    };

    println!("Listing devices...");
    let client = Arc::new(GoveeClient::new(config)?);
    let mut devices = Device::discover(client).await?;

    if devices.is_empty() {
        println!("No devices found on this account.");
        return Ok(());
    }

    for (idx, device) in devices.iter().enumerate() {
        let d = device.descriptor();
        println!(
            "  [{idx}] {} ({} {}){}",
            d.display_name(),
            d.model(),
            d.device_id(),
            if d.controllable() { "" } else { " [read-only]" },
        );
    }

    let idx = prompt_number("Pick a device", devices.len() - 1)?;
    let device = &mut devices[idx];
    println!("Selected {}.", device.descriptor().display_name());

    loop {
        println!();
        println!("  [1] Refresh state");
        println!("  [2] Turn on");
        println!("  [3] Turn off");
        println!("  [4] Set color (hex)");
        println!("  [5] Set color temperature (Kelvin)");
        println!("  [6] Set brightness (0-100)");
        println!("  [0] Quit");

        match prompt_number("Choice", 6)? {
            0 => break,
            1 => match device.refresh_state().await {
                Ok(state) => {
                    println!("Online:      {:?}", state.online());
                    println!("Power:       {:?}", state.power());
                    println!("Brightness:  {:?}", state.brightness());
                    println!("Color:       {:?}", state.color());
                    println!("Color temp:  {:?}", state.color_temperature());
                }
                Err(e) => println!("Refresh failed: {e}"),
            },
            2 => report(device.turn_on().await),
            3 => report(device.turn_off().await),
            4 => {
                let line = prompt_line("Color (e.g. #ff8800)")?;
                match line.parse::<Rgb>() {
                    Ok(color) => report(device.set_color(color).await),
                    Err(e) => println!("{e}"),
                }
            }
            5 => {
                let kelvin = Kelvin::new(prompt_number("Kelvin (e.g. 4000)", 20000)? as u32);
                report(device.set_color_temperature(kelvin).await);
            }
            6 => match Brightness::new(prompt_number("Brightness", 100)? as u8) {
                Ok(level) => report(device.set_brightness(level).await),
                Err(e) => println!("{e}"),
            },
            _ => unreachable!(),
        }
    }

    println!("Done!");
    Ok(())
}

fn report(result: govee_lib::Result<bool>) {
    match result {
        Ok(true) => println!("OK"),
        Ok(false) => println!("The API rejected the command."),
        Err(e) => println!("Failed: {e}"),
    }
}

fn prompt_line(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_number(label: &str, max: usize) -> io::Result<usize> {
    loop {
        let line = prompt_line(label)?;
        match line.parse::<usize>() {
            Ok(n) if n <= max => return Ok(n),
            _ => println!("Enter a number between 0 and {max}."),
        }
    }
}
