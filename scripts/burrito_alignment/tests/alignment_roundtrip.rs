use std::fs;

use anyhow::Result;
use burrito_alignment::{
    AlignmentError, AlignmentFile, BurritoAudioAlignment, CueContent, TimeInterval, WriteOptions,
    sort_cues,
};

fn sample_cues() -> Vec<CueContent> {
    vec![
        CueContent::from_reference("GEN 1:2", TimeInterval::new(4_250_000, 9_000_000)),
        CueContent::from_reference("GEN 1", TimeInterval::new(0, 60_000_000)),
        CueContent::from_reference("GEN 1:1", TimeInterval::new(0, 4_250_000)),
        CueContent::from_reference("GEN 1:3", TimeInterval::new(9_000_000, 3_723_004_000)),
    ]
}

#[test]
fn test_create_persist_load_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("gen_001.json");

    let mut file = AlignmentFile::create("gen_001.wav", &path)?;
    file.alignment_mut().set_records_from_cues(&sample_cues());
    file.persist()?;

    let loaded = AlignmentFile::load(&path)?;
    assert_eq!(loaded.path(), path.as_path());
    assert_eq!(loaded.alignment().audio_file_name(), "gen_001.wav");
    assert_eq!(loaded.alignment().all_cues(), sort_cues(sample_cues()));

    let tags: Vec<String> = loaded
        .alignment()
        .all_cues()
        .into_iter()
        .map(|c| c.tag)
        .collect();
    assert_eq!(tags, vec!["GEN 1", "GEN 1:1", "GEN 1:2", "GEN 1:3"]);

    Ok(())
}

#[test]
fn test_create_truncates_existing_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("timing.json");

    let mut old = BurritoAudioAlignment::new("old.wav");
    old.set_records_from_cues(&sample_cues());
    old.write_with_options(&path, WriteOptions { pretty: true })?;
    assert_eq!(AlignmentFile::load(&path)?.alignment().records().len(), 4);

    AlignmentFile::create("new.wav", &path)?;

    let loaded = AlignmentFile::load(&path)?;
    assert!(loaded.alignment().records().is_empty());
    assert_eq!(loaded.alignment().audio_file_name(), "new.wav");

    Ok(())
}

#[test]
fn test_load_rejects_unknown_format() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bad.json");

    let json = BurritoAudioAlignment::new("a.wav")
        .to_json(WriteOptions::default())?
        .replace(r#""format":"alignment""#, r#""format":"something-else""#);
    fs::write(&path, json)?;

    assert!(matches!(
        AlignmentFile::load(&path),
        Err(AlignmentError::Format(_))
    ));
    Ok(())
}

#[test]
fn test_load_missing_file_is_io_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    assert!(matches!(
        AlignmentFile::load(dir.path().join("missing.json")),
        Err(AlignmentError::Io(_))
    ));
    assert!(matches!(
        AlignmentFile::create("a.wav", dir.path().join("no_such_dir").join("a.json")),
        Err(AlignmentError::Io(_))
    ));
    Ok(())
}

#[test]
fn test_malformed_records_do_not_block_others() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("hand_edited.json");
    fs::write(
        &path,
        r#"{"format":"alignment","version":"0.3","type":"audio-reference",
            "documents":{"timecode":{"scheme":"vtt-timestamp","docid":"a.wav"},
                         "text-reference":{"scheme":"u23003"}},
            "records":[
              {"timecode":["bad --> data"],"text-reference":["GEN 1:1"]},
              {"timecode":["00:00:02.000 --> 00:00:03.000"],"text-reference":["GEN 1:2"]},
              {"timecode":[],"text-reference":["GEN 1:3"]}
            ]}"#,
    )?;

    let file = AlignmentFile::load(&path)?;
    let conversion = file.alignment().cues_with_diagnostics();
    assert_eq!(conversion.cues.len(), 1);
    assert_eq!(conversion.cues[0].tag, "GEN 1:2");
    assert_eq!(
        conversion.skipped.iter().map(|s| s.index).collect::<Vec<_>>(),
        vec![0, 2]
    );

    // 写回后坏记录仍然保留在文件中
    file.persist()?;
    assert_eq!(AlignmentFile::load(&path)?.alignment().records().len(), 3);
    Ok(())
}
