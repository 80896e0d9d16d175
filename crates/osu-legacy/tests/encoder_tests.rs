//! Whole-document encoder tests.
//!
//! Exercises the fixed section layout, the empty-section skip rules,
//! and the exact line grammar of timing points and hit objects.

use std::io::{Read, Seek, SeekFrom};

use osu_legacy::{
    Beatmap, ControlPoint, DifficultyPoint, DifficultySettings, EffectPoint, Error, HitObject,
    HitObjectKind, HitSample, LegacyEncoder, Metadata, PathControlPoint, PathType, Pos2,
    SamplePoint, SliderPath, TimingPoint,
};

fn sample(name: &str, bank: &str, volume: i32) -> HitSample {
    HitSample {
        name: name.to_owned(),
        bank: bank.to_owned(),
        volume,
        ..HitSample::default()
    }
}

fn circle(x: f32, y: f32, start_time: f64) -> HitObject {
    HitObject {
        position: Pos2::new(x, y),
        start_time,
        new_combo: false,
        combo_offset: 0,
        samples: Vec::new(),
        kind: HitObjectKind::Circle,
    }
}

fn linear_slider() -> HitObject {
    HitObject {
        position: Pos2::new(50.0, 50.0),
        start_time: 1000.0,
        new_combo: false,
        combo_offset: 0,
        samples: Vec::new(),
        kind: HitObjectKind::Slider {
            path: SliderPath {
                control_points: vec![
                    PathControlPoint::segment_start(Pos2::new(0.0, 0.0), PathType::Linear),
                    PathControlPoint::new(Pos2::new(100.0, 0.0)),
                ],
                expected_distance: 100.0,
            },
            repeat_count: 1,
            node_samples: Vec::new(),
        },
    }
}

fn test_beatmap() -> Beatmap {
    let mut beatmap = Beatmap {
        metadata: Metadata {
            title: "Night Sky".to_owned(),
            title_unicode: "Night Sky".to_owned(),
            artist: "citrus".to_owned(),
            artist_unicode: "citrus".to_owned(),
            creator: "badeu".to_owned(),
            version: "Hard".to_owned(),
            source: String::new(),
            tags: "melodic".to_owned(),
            beatmap_id: Some(123),
            beatmap_set_id: Some(45),
            audio_file: "audio/track.mp3".to_owned(),
            preview_time: 5500,
        },
        difficulty: DifficultySettings {
            drain_rate: 6.0,
            circle_size: 4.0,
            overall_difficulty: 7.5,
            approach_rate: 9.0,
            slider_multiplier: 1.8,
            slider_tick_rate: 2.0,
        },
        ..Beatmap::default()
    };
    beatmap.editor.bookmarks = vec![1000, 2000];

    beatmap.control_points.add(
        0.0,
        ControlPoint::Timing(TimingPoint {
            beat_length: 500.0,
            time_signature: 4,
        }),
    );
    beatmap.control_points.add(
        0.0,
        ControlPoint::Sample(SamplePoint {
            bank: Some("soft".to_owned()),
            suffix: None,
            volume: Some(60),
        }),
    );
    beatmap.control_points.add(
        1000.0,
        ControlPoint::Difficulty(DifficultyPoint {
            speed_multiplier: 2.0,
        }),
    );
    beatmap.control_points.add(
        1000.0,
        ControlPoint::Effect(EffectPoint {
            kiai: true,
            omit_first_bar_line: false,
        }),
    );

    let mut circle = circle(100.0, 200.0, 2500.0);
    circle.samples = vec![sample(HitSample::NORMAL, "normal", 70)];

    beatmap.hit_objects = vec![linear_slider(), circle];
    beatmap
}

fn encode(beatmap: &Beatmap, ruleset_id: u8) -> String {
    LegacyEncoder::new(beatmap, ruleset_id)
        .unwrap()
        .encode_to_string()
        .unwrap()
}

mod construction {
    use super::*;

    #[test]
    fn test_all_legacy_rulesets_accepted() {
        let beatmap = Beatmap::default();
        for id in 0..=3 {
            assert!(LegacyEncoder::new(&beatmap, id).is_ok());
        }
    }

    #[test]
    fn test_out_of_range_rulesets_rejected() {
        let beatmap = Beatmap::default();
        for id in [4, 5, 100, 255] {
            assert!(matches!(
                LegacyEncoder::new(&beatmap, id),
                Err(Error::InvalidRuleset(got)) if got == id
            ));
        }
    }
}

mod document_layout {
    use super::*;

    #[test]
    fn test_header_line_carries_version() {
        let output = encode(&Beatmap::default(), 0);
        assert!(output.starts_with("osu file format v14234\n"));
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let output = encode(&test_beatmap(), 0);
        let positions: Vec<usize> = [
            "[General]",
            "[Editor]",
            "[Metadata]",
            "[Difficulty]",
            "[TimingPoints]",
            "[HitObjects]",
        ]
        .iter()
        .map(|header| output.find(header).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_events_section_is_never_written() {
        assert!(!encode(&test_beatmap(), 0).contains("[Events]"));
        assert!(!encode(&Beatmap::default(), 0).contains("[Events]"));
    }

    #[test]
    fn test_empty_timeline_skips_timing_points() {
        let mut beatmap = test_beatmap();
        beatmap.control_points = Default::default();
        assert!(!encode(&beatmap, 0).contains("[TimingPoints]"));
    }

    #[test]
    fn test_no_hit_objects_skips_section() {
        let mut beatmap = test_beatmap();
        beatmap.hit_objects.clear();
        assert!(!encode(&beatmap, 0).contains("[HitObjects]"));
    }

    #[test]
    fn test_complete_document() {
        let expected = [
            "osu file format v14234",
            "",
            "[General]",
            "AudioFilename: track.mp3",
            "AudioLeadIn: 0",
            "PreviewTime: 5500",
            "Countdown: 0",
            "SampleSet: Soft",
            "StackLeniency: 0.7",
            "Mode: 0",
            "LetterboxInBreaks: 0",
            "WidescreenStoryboard: 0",
            "",
            "[Editor]",
            "Bookmarks: 1000,2000",
            "DistanceSpacing: 1",
            "BeatDivisor: 4",
            "GridSize: 4",
            "TimelineZoom: 1",
            "",
            "[Metadata]",
            "Title: Night Sky",
            "TitleUnicode: Night Sky",
            "Artist: citrus",
            "ArtistUnicode: citrus",
            "Creator: badeu",
            "Version: Hard",
            "Source: ",
            "Tags: melodic",
            "BeatmapID: 123",
            "BeatmapSetID: 45",
            "",
            "[Difficulty]",
            "HPDrainRate: 6",
            "CircleSize: 4",
            "OverallDifficulty: 7.5",
            "ApproachRate: 9",
            "SliderMultiplier: 1.8",
            "SliderTickRate: 2",
            "",
            "",
            "[TimingPoints]",
            "0,500,4,2,0,60,1,0",
            "1000,-50,4,2,0,60,0,1",
            "",
            "[HitObjects]",
            "50,50,1000,2,1,L|50:50|150:50,0,100,0:0:0:0:",
            "100,200,2500,1,1,1:1:0:70:",
        ]
        .join("\n")
            + "\n";

        assert_eq!(encode(&test_beatmap(), 0), expected);
    }
}

mod general_section {
    use super::*;

    #[test]
    fn test_audio_filename_strips_directories() {
        let output = encode(&test_beatmap(), 0);
        assert!(output.contains("AudioFilename: track.mp3\n"));
    }

    #[test]
    fn test_sample_set_defaults_to_normal_without_sample_points() {
        let output = encode(&Beatmap::default(), 0);
        assert!(output.contains("SampleSet: Normal\n"));
    }

    #[test]
    fn test_special_style_only_for_mania() {
        let mut beatmap = test_beatmap();
        beatmap.hit_objects.clear();
        beatmap.general.special_style = true;

        assert!(!encode(&beatmap, 0).contains("SpecialStyle"));
        let mania = encode(&beatmap, 3);
        assert!(mania.contains("SpecialStyle: 1\n"));
        assert!(mania.contains("Mode: 3\n"));
    }
}

mod editor_section {
    use super::*;

    #[test]
    fn test_bookmarks_line_omitted_when_empty() {
        let mut beatmap = test_beatmap();
        beatmap.editor.bookmarks.clear();
        assert!(!encode(&beatmap, 0).contains("Bookmarks:"));
    }
}

mod metadata_section {
    use super::*;

    #[test]
    fn test_version_comes_from_difficulty_name() {
        let output = encode(&test_beatmap(), 0);
        assert!(output.contains("Version: Hard\n"));
        assert!(!output.contains("Version: citrus\n"));
    }

    #[test]
    fn test_absent_online_ids_render_as_zero() {
        let mut beatmap = test_beatmap();
        beatmap.metadata.beatmap_id = None;
        beatmap.metadata.beatmap_set_id = None;
        let output = encode(&beatmap, 0);
        assert!(output.contains("BeatmapID: 0\n"));
        assert!(output.contains("BeatmapSetID: 0\n"));
    }
}

mod hit_objects_section {
    use super::*;

    #[test]
    fn test_unspecified_ruleset_with_hit_objects_fails() {
        let beatmap = test_beatmap();
        for id in 1..=3 {
            let encoder = LegacyEncoder::new(&beatmap, id).unwrap();
            assert!(matches!(
                encoder.encode_to_string(),
                Err(Error::UnsupportedRuleset(_))
            ));
        }
    }

    #[test]
    fn test_unspecified_ruleset_without_hit_objects_encodes() {
        let mut beatmap = test_beatmap();
        beatmap.hit_objects.clear();
        for id in 1..=3 {
            let encoder = LegacyEncoder::new(&beatmap, id).unwrap();
            assert!(encoder.encode_to_string().is_ok());
        }
    }

    #[test]
    fn test_new_combo_type_mask() {
        let mut beatmap = test_beatmap();
        let mut object = circle(10.0, 20.0, 100.0);
        object.new_combo = true;
        object.combo_offset = 3;
        beatmap.hit_objects = vec![object];

        let output = encode(&beatmap, 0);
        assert!(output.contains("10,20,100,65,1,0:0:0:0:\n"));
    }

    #[test]
    fn test_whistle_and_clap_hitsound_mask() {
        let mut beatmap = test_beatmap();
        let mut object = circle(10.0, 20.0, 100.0);
        object.samples = vec![
            sample(HitSample::WHISTLE, "soft", 80),
            sample(HitSample::CLAP, "soft", 80),
        ];
        beatmap.hit_objects = vec![object];

        let output = encode(&beatmap, 0);
        assert!(output.contains("10,20,100,1,11,"));
    }

    #[test]
    fn test_slider_path_round_trip_payload() {
        let output = encode(&test_beatmap(), 0);
        assert!(output.contains("L|50:50|150:50,0,100,"));
    }
}

#[test]
fn test_encode_to_file() {
    let mut file = tempfile::tempfile().unwrap();
    let beatmap = test_beatmap();
    let encoder = LegacyEncoder::new(&beatmap, 0).unwrap();
    encoder.encode(&mut file).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, encoder.encode_to_string().unwrap());
}
