use panelstat_transport::{PRODUCT_ID, VENDOR_ID};

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("panelstat {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: panelstat");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!(
        "build_target: {}",
        option_env!("PANELSTAT_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("panel_usb_id: {VENDOR_ID:04X}:{PRODUCT_ID:04X}");

    Ok(SUCCESS)
}
