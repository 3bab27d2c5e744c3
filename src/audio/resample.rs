//! Audio resampling using rubato.

use crate::error::{Error, Result};
use audioadapter_buffers::direct::SequentialSlice;
use rubato::{Fft, FixedSync, Resampler};

const CHUNK_SIZE: usize = 1024;

/// Resample mono audio to the target sample rate.
///
/// Returns the input unchanged if already at the target rate. The tail of
/// the signal is zero-padded up to a full resampler chunk and the output is
/// truncated back to the proportional length.
///
/// The FFT resampler's filter delay (`output_delay`, a few milliseconds) is
/// left in place: annotations are resolved to whole one-second windows, well
/// above that shift.
pub fn resample(samples: Vec<f32>, from_rate: u32, to_rate: u32) -> Result<Vec<f32>> {
    if from_rate == to_rate {
        return Ok(samples);
    }

    let mut resampler = Fft::<f32>::new(
        from_rate as usize,
        to_rate as usize,
        CHUNK_SIZE,
        1, // sub_chunks
        1, // channels
        FixedSync::Both,
    )
    .map_err(|e| Error::Resample {
        reason: e.to_string(),
    })?;

    let frames_per_chunk = resampler.input_frames_next();
    let mut output = Vec::with_capacity(scaled_len(samples.len(), from_rate, to_rate) + CHUNK_SIZE);

    let mut chunks = samples.chunks_exact(frames_per_chunk);
    for chunk in chunks.by_ref() {
        output.extend(process_chunk(&mut resampler, chunk, frames_per_chunk)?);
    }

    let remainder = chunks.remainder();
    if !remainder.is_empty() {
        let mut padded = remainder.to_vec();
        padded.resize(frames_per_chunk, 0.0);
        let resampled = process_chunk(&mut resampler, &padded, frames_per_chunk)?;

        // Only keep the part corresponding to real input.
        let wanted = scaled_len(remainder.len(), from_rate, to_rate);
        output.extend_from_slice(&resampled[..wanted.min(resampled.len())]);
    }

    Ok(output)
}

/// Run one fixed-size chunk through the resampler.
fn process_chunk(
    resampler: &mut Fft<f32>,
    chunk: &[f32],
    frames: usize,
) -> Result<Vec<f32>> {
    let input = SequentialSlice::new(chunk, 1, frames).map_err(|e| Error::Resample {
        reason: format!("failed to create input adapter: {e}"),
    })?;

    let resampled = resampler
        .process(&input, 0, None)
        .map_err(|e| Error::Resample {
            reason: e.to_string(),
        })?;

    Ok(resampled.take_data())
}

/// Length of `input_len` frames after rate conversion, rounded up.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn scaled_len(input_len: usize, from_rate: u32, to_rate: u32) -> usize {
    ((input_len as f64) * f64::from(to_rate) / f64::from(from_rate)).ceil() as usize
}
