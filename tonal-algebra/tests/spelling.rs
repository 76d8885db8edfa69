use itertools::Itertools;

use tonal_algebra::{
    lilypond_render::render_relative, primitives::parse_interval,
    RendersToLilypond, SpellingSettings, TonalValue,
};

#[test]
fn unicode_and_ascii() {
    let pitches = ["C", "C♯0", "D♭4", "E𝄫", "F𝄪-1", "B♯", "C♭2"];
    let ascii = ["C", "C#0", "Db4", "Ebb", "F##-1", "B#", "Cb2"];
    for (unicode, ascii) in pitches.into_iter().zip_eq(ascii) {
        let pitch = unicode.parse::<TonalValue>().unwrap().pitch();
        assert_eq!(pitch.unicode().unwrap(), unicode);
        assert_eq!(pitch.ascii().unwrap(), ascii);
        assert_eq!(ascii.parse::<TonalValue>().unwrap().pitch(), pitch);
    }
}

#[test]
fn middle_c_settings() {
    let settings: SpellingSettings =
        serde_json::from_str(r#"{"middle_c_octave": 4}"#).unwrap();
    assert_eq!(settings, SpellingSettings::c4());
    let json = serde_json::to_string(&settings).unwrap();
    assert_eq!(json, r#"{"middle_c_octave":4}"#);

    let a = TonalValue::qualified(5, 9, 0).pitch();
    assert_eq!(a.unicode_with(&settings).unwrap(), a.unicode_c4().unwrap());
    assert_eq!(a.ascii_with(&settings).unwrap(), "A4");
    assert_eq!(a.octave_with(&settings), Some(4));
}

#[test]
fn lilypond_absolute() {
    let expected = [
        ((0, 0, 0), "c'"),
        ((0, 0, -1), "c"),
        ((0, 0, -2), "c,"),
        ((6, 10, -1), "bes"),
        ((1, 1, 4), "des'''''"),
        ((2, 3, 0), "es'"),
        ((5, 8, 1), "as''"),
        ((3, 6, 0), "fis'"),
    ];
    for (tuple, spelling) in expected {
        let pitch = TonalValue::from(tuple).pitch();
        assert_eq!(pitch.render_lilypond().unwrap(), spelling);
    }
}

#[test]
fn lilypond_relative_melody() {
    let melody = ["C0", "E0", "G0", "C1", "B0", "G0", "D0", "C0", "G-1"]
        .into_iter()
        .map(|name| name.parse::<TonalValue>().map(|v| v.pitch()))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(
        render_relative(&melody).unwrap(),
        r"\relative { c' e g c b g d c g }"
    );
}

#[test]
fn interval_names() {
    let names = ["per1", "maj2", "maj3", "per4", "aug4", "per5", "maj6", "maj7"];
    let parsed = ["P1", "M2", "M3", "P4", "a4", "P5", "M6", "M7"];
    for (name, text) in names.into_iter().zip_eq(parsed) {
        let interval = parse_interval(text).unwrap().interval().unwrap();
        assert_eq!(interval.abbr(), name);
    }
    let compound = parse_interval("aug4+1").unwrap().interval().unwrap();
    assert_eq!(compound.abbr(), "aug4+1");
    assert_eq!(compound.render_lilypond().unwrap(), "fis''");
}

#[test]
fn verbose_names() {
    let verbose = |text: &str| {
        text.parse::<TonalValue>().unwrap().pitch().verbose().unwrap()
    };
    assert_eq!(verbose("c"), "C");
    assert_eq!(verbose("c#"), "C sharp");
    assert_eq!(verbose("c#1"), "C sharp 1");
    assert_eq!(verbose("Abb-1"), "A double flat -1");
}
