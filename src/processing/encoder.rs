//! GIF encoding of an ordered frame sequence.

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame as GifFrame};
use tracing::debug;

use crate::core::{Frame, LoopBehavior};
use crate::utils::{AnimatorError, AnimatorResult};

/// Largest logical screen side a GIF can describe.
const MAX_GIF_SIDE: u32 = u16::MAX as u32;

/// Encodes `frames` into an in-memory GIF.
///
/// The first frame fixes the logical screen size; every other frame must
/// match it. Nothing is written to disk here, so a failure leaves no partial
/// artifact behind.
///
/// GIF stores frame delays in whole hundredths of a second and the encoder
/// drops the remainder: 16 ms is written as 1 cs (10 ms) and 8 ms as 0.
pub fn encode_animation(
    frames: Vec<Frame>,
    frame_delay_ms: u32,
    repeat: LoopBehavior,
) -> AnimatorResult<Vec<u8>> {
    let Some(first) = frames.first() else {
        return Err(AnimatorError::encode("Cannot encode an animation without frames"));
    };

    let (width, height) = first.dimensions();
    if width > MAX_GIF_SIDE || height > MAX_GIF_SIDE {
        return Err(AnimatorError::encode(format!(
            "'{}' is {width}x{height}, larger than a GIF can hold",
            first.file.file_name()
        )));
    }

    if frame_delay_ms % 10 != 0 {
        debug!(
            "Frame delay {frame_delay_ms}ms is stored as {}ms",
            frame_delay_ms / 10 * 10
        );
    }
    let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut bytes);
        apply_repeat(&mut encoder, repeat)?;

        for frame in frames {
            if frame.dimensions() != (width, height) {
                let (w, h) = frame.dimensions();
                return Err(AnimatorError::encode(format!(
                    "'{}' is {w}x{h}, expected {width}x{height}",
                    frame.file.file_name()
                )));
            }

            let name = frame.file.file_name().to_string();
            encoder
                .encode_frame(GifFrame::from_parts(frame.image, 0, 0, delay))
                .map_err(|e| AnimatorError::encode(format!("Failed to encode '{name}': {e}")))?;
        }
        // Dropping the encoder writes the GIF trailer.
    }

    debug!("Encoded {} bytes", bytes.len());
    Ok(bytes)
}

fn apply_repeat<W: std::io::Write>(
    encoder: &mut GifEncoder<W>,
    repeat: LoopBehavior,
) -> AnimatorResult<()> {
    let repeat = match repeat {
        LoopBehavior::Infinite => Repeat::Infinite,
        LoopBehavior::Finite(n) => Repeat::Finite(n),
        LoopBehavior::EncoderDefault => return Ok(()),
    };

    encoder
        .set_repeat(repeat)
        .map_err(|e| AnimatorError::encode(format!("Could not set gif repeat: {e}")))
}
