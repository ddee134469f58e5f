use audiodrop::domain::{AudioFormat, StorageName};

#[test]
fn given_name_with_spaces_when_generating_then_whitespace_collapses_to_underscores() {
    let name = StorageName::generate("Test Recording.wav", 1_700_000_000_000);
    assert_eq!(name.as_str(), "Test_Recording_1700000000000.wav");
}

#[test]
fn given_uppercase_extension_when_generating_then_extension_is_lowercased() {
    let name = StorageName::generate("Session.WAV", 1_700_000_000_000);
    assert_eq!(name.as_str(), "Session_1700000000000.wav");
}

#[test]
fn given_whitespace_runs_when_generating_then_one_underscore_per_run() {
    let name = StorageName::generate("a   b\t c.wav", 42);
    assert_eq!(name.as_str(), "a_b_c_42.wav");
}

#[test]
fn given_blank_basename_when_generating_then_falls_back_to_audio() {
    let name = StorageName::generate(" .wav", 42);
    assert_eq!(name.as_str(), "audio_42.wav");
}

#[test]
fn given_different_names_in_same_millisecond_when_generating_then_names_differ() {
    let a = StorageName::generate("one.wav", 42);
    let b = StorageName::generate("two.wav", 42);
    assert_ne!(a, b);
}

#[test]
fn given_storage_name_when_displayed_then_matches_as_str() {
    let name = StorageName::generate("clip.wav", 7);
    assert_eq!(format!("{}", name), name.as_str());
}

#[test]
fn given_wav_extension_when_checking_format_then_accepted_case_insensitively() {
    assert_eq!(AudioFormat::from_filename("take1.wav"), Some(AudioFormat::Wav));
    assert_eq!(AudioFormat::from_filename("take1.WAV"), Some(AudioFormat::Wav));
    assert_eq!(AudioFormat::from_filename("take1.Wav"), Some(AudioFormat::Wav));
    assert_eq!(AudioFormat::Wav.extension(), "wav");
}

#[test]
fn given_other_extension_when_checking_format_then_rejected() {
    assert_eq!(AudioFormat::from_filename("take1.mp3"), None);
    assert_eq!(AudioFormat::from_filename("notes.txt"), None);
    assert_eq!(AudioFormat::from_filename("noextension"), None);
}
