//! Checkpoint-to-disk cycle
//!
//! Writes a checkpoint through a file-backed channel, reopens the file in
//! a fresh reader, and replays the load sequence - the closest analog to
//! an actual restart in these tests.

use meshpoint::{
    load, store, CheckpointContext, DenseMatrix, FileReader, FileWriter, RankTwoTensor, Real,
    SyncMode, TextBuffer,
};
use tempfile::TempDir;

#[test]
fn checkpoint_file_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("checkpoints").join("step_0042.cp");

    let ctx = CheckpointContext::empty();

    let time: Real = 0.42;
    let step: u64 = 42;
    let mut norms = DenseMatrix::new(3, 1);
    norms[(0, 0)] = 1e-3;
    norms[(1, 0)] = 1e-6;
    norms[(2, 0)] = 1e-9;
    let stress = RankTwoTensor::from_coords([1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 3.0]);
    let mut console = TextBuffer::new();
    console.push_str("converged in 4 iterations\n");

    {
        let mut writer = FileWriter::create(&path, SyncMode::default()).unwrap();
        store(&time, &mut writer, &ctx).unwrap();
        store(&step, &mut writer, &ctx).unwrap();
        store(&norms, &mut writer, &ctx).unwrap();
        store(&stress, &mut writer, &ctx).unwrap();
        store(&console, &mut writer, &ctx).unwrap();
        writer.finish().unwrap();
    }

    // Fresh reader over the same file
    let mut reader = FileReader::open(&path).unwrap();

    let mut time_out: Real = 0.0;
    let mut step_out: u64 = 0;
    let mut norms_out = DenseMatrix::new(0, 0);
    let mut stress_out = RankTwoTensor::new();
    let mut console_out = TextBuffer::new();

    load(&mut time_out, &mut reader, &ctx).unwrap();
    load(&mut step_out, &mut reader, &ctx).unwrap();
    load(&mut norms_out, &mut reader, &ctx).unwrap();
    load(&mut stress_out, &mut reader, &ctx).unwrap();
    load(&mut console_out, &mut reader, &ctx).unwrap();

    assert_eq!(time_out, time);
    assert_eq!(step_out, step);
    assert_eq!(norms_out, norms);
    assert_eq!(stress_out, stress);
    assert_eq!(console_out.as_str(), console.as_str());

    // The file holds exactly the stored sequence
    let mut probe = [0u8; 1];
    assert!(meshpoint::ByteSource::read_bytes(&mut reader, &mut probe).is_err());
}

#[test]
fn truncated_checkpoint_underruns() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.cp");

    let ctx = CheckpointContext::empty();
    {
        let mut writer = FileWriter::create(&path, SyncMode::default()).unwrap();
        store(&7u32, &mut writer, &ctx).unwrap();
        writer.finish().unwrap();
    }

    // Replaying with a wider type than was stored runs off the end
    let mut reader = FileReader::open(&path).unwrap();
    let mut out: u64 = 0;
    assert!(load(&mut out, &mut reader, &ctx).is_err());
}
