use anyhow::Result;
use clap::Parser;
use nalgebra::Vector3;
use std::io::Write;

use crate::error::InputError;
use crate::sez::ecef_to_sez;

pub const USAGE: &str = "Usage: ecef-sez o_x_km o_y_km o_z_km x_km y_km z_km";

const ARG_NAMES: [&str; 6] = ["o_x_km", "o_y_km", "o_z_km", "x_km", "y_km", "z_km"];

#[derive(Parser, Debug)]
#[command(name = "ecef-sez", disable_help_flag = true)]
#[command(about = "Convert an ECEF position to SEZ components relative to an ECEF origin")]
pub struct Cli {
    /// o_x_km o_y_km o_z_km x_km y_km z_km
    ///
    /// Everything is taken as a value so the count check and float parsing
    /// see the arguments unchanged.
    #[arg(value_name = "KM", allow_hyphen_values = true, trailing_var_arg = true)]
    pub values: Vec<String>,
}

/// Origin and target ECEF positions in km.
#[derive(Debug, Clone, Copy)]
pub struct Positions {
    pub origin: Vector3<f64>,
    pub target: Vector3<f64>,
}

impl Positions {
    pub fn parse(values: &[String; 6]) -> Result<Self, InputError> {
        let mut km = [0.0; 6];
        for ((slot, value), name) in km.iter_mut().zip(values).zip(ARG_NAMES) {
            *slot = value
                .trim()
                .parse::<f64>()
                .map_err(|source| InputError::InvalidNumber {
                    name,
                    value: value.clone(),
                    source,
                })?;
        }

        Ok(Self {
            origin: Vector3::new(km[0], km[1], km[2]),
            target: Vector3::new(km[3], km[4], km[5]),
        })
    }
}

/// Print the SEZ components of the origin relative to the target, one per line.
///
/// Any argument count other than six prints the usage line instead and is not
/// treated as a failure.
pub fn run<W: Write>(values: &[String], out: &mut W) -> Result<()> {
    let Ok(values) = <&[String; 6]>::try_from(values) else {
        writeln!(out, "{}", USAGE)?;
        return Ok(());
    };

    let positions = Positions::parse(values)?;
    let sez = ecef_to_sez(&positions.origin, &positions.target);

    writeln!(out, "{}", sez.south)?;
    writeln!(out, "{}", sez.east)?;
    writeln!(out, "{}", sez.zenith)?;
    Ok(())
}
