//! AI Speech - Audio normalization and speech-to-text
//!
//! Turns an uploaded audio blob of arbitrary container/codec into text:
//!
//! 1. [`AudioConverter`] re-encodes the blob to 16-bit PCM WAV via FFmpeg.
//! 2. [`ScopedWav`] holds the waveform in a uniquely-named temporary file
//!    that is removed when the request scope ends.
//! 3. [`WhisperTranscriber`] sends the WAV file to the OpenAI Whisper API
//!    and returns the cleaned transcript.
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{AudioConverter, ScopedWav, SpeechConfig, WhisperTranscriber};
//!
//! let converter = AudioConverter::new();
//! let wav_bytes = converter.convert_to_wav(&upload).await?;
//! let wav = ScopedWav::write(&wav_bytes)?;
//! let transcriber = WhisperTranscriber::new(config)?;
//! let transcription = transcriber.transcribe_wav(wav.path()).await?;
//! // `wav` drops here and the temp file is deleted
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod scratch;
pub mod types;
pub mod whisper;

pub use config::SpeechConfig;
pub use converter::AudioConverter;
pub use error::SpeechError;
pub use scratch::ScopedWav;
pub use types::Transcription;
pub use whisper::WhisperTranscriber;
