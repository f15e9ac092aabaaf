use std::fs::File;

use panelstat_proto::{PacketWriter, TransferPlan};
use panelstat_render::{parse_hex_color, PixelBuffer, Rgb565};
use tracing::info;

use crate::cmd::{resolve_device, SplashArgs};
use crate::exit::{io_error, protocol_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::OutputFormat;
use crate::screen::{PANEL_HEIGHT, PANEL_WIDTH};

pub fn run(args: SplashArgs, _format: OutputFormat) -> CliResult<i32> {
    let color = parse_hex_color(&args.color).ok_or_else(|| {
        CliError::new(
            USAGE,
            format!("--color must be RRGGBB hex, got {:?}", args.color),
        )
    })?;

    let mut fb = PixelBuffer::new(PANEL_WIDTH, PANEL_HEIGHT);
    fb.clear(color);
    if let Some(text) = &args.text {
        // The font is uppercase-only.
        let text = text.to_uppercase();
        let (x, y) = centered_origin(text.chars().count(), args.scale);
        fb.draw_text(x, y, &text, args.scale.max(1), Rgb565::WHITE, color);
    }
    let frame = fb.to_wire_bytes();

    match &args.out {
        Some(path) => {
            let file =
                File::create(path).map_err(|err| io_error("failed to create output file", err))?;
            let mut writer = PacketWriter::new(file);
            writer
                .send_frame(&frame)
                .map_err(|err| protocol_error("encode failed", err))?;
            let packets = TransferPlan::new(frame.len(), writer.config())
                .map(|plan| plan.chunk_count())
                .unwrap_or(0);
            info!(packets, path = %path.display(), "wrote packet stream");
        }
        None => {
            let device = resolve_device(&args.device)?;
            let mut writer = PacketWriter::new(device);
            writer
                .send_frame(&frame)
                .map_err(|err| protocol_error("frame send failed", err))?;
            info!("splash frame sent");
        }
    }

    Ok(SUCCESS)
}

/// Top-left origin that centers `chars` characters at `scale` on the panel.
fn centered_origin(chars: usize, scale: i32) -> (i32, i32) {
    let scale = scale.max(1);
    // The advance includes a trailing spacing column; ignore it when
    // measuring, the last glyph is only 5 columns wide.
    let text_w = (chars as i32 * 6 - 1) * scale;
    let text_h = 7 * scale;
    (
        (PANEL_WIDTH as i32 - text_w) / 2,
        (PANEL_HEIGHT as i32 - text_h) / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_text_on_the_panel() {
        let (x, y) = centered_origin(2, 2);
        // Two chars at scale 2: 22px wide, 14px tall.
        assert_eq!(x, (320 - 22) / 2);
        assert_eq!(y, (170 - 14) / 2);

        // Oversized text clamps left of zero and clips when drawn.
        let (x, _) = centered_origin(60, 1);
        assert!(x < 0);
    }

    #[test]
    fn malformed_color_is_a_usage_error() {
        let args = SplashArgs {
            device: None,
            color: "not-hex".to_string(),
            text: None,
            scale: 2,
            out: Some(std::env::temp_dir().join("panelstat-unused.bin")),
        };
        let err = run(args, OutputFormat::Json).unwrap_err();
        assert_eq!(err.code, USAGE);
    }
}
