//! External tool diagnostics command.

use crate::{exif, finder};

use super::{print_exiftool_install_instructions, print_tag_install_instructions};

/// Check if the external metadata and tagging tools are installed
pub fn cmd_check_tools() -> anyhow::Result<()> {
    println!("Checking external tools...\n");

    if let Some(version) = exif::get_exiftool_version() {
        println!("✓ exiftool: {}", version);
    } else {
        println!("✗ exiftool: NOT FOUND");
        print_exiftool_install_instructions();
    }

    println!();

    if let Some(version) = finder::get_tag_version() {
        println!("✓ tag: {}", version);
    } else {
        println!("✗ tag: NOT FOUND");
        print_tag_install_instructions();
    }

    Ok(())
}
