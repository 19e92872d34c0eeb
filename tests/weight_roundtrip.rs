use std::path::PathBuf;

use ferrite_backprop::codec::{read_bmp, write_bmp, PixelGrid};
use ferrite_backprop::network::export::{parse_records, records_to_string, save_records};
use ferrite_backprop::runner::{run_autoencoder, run_cases};
use ferrite_backprop::{Network, NetworkConfig, RunMode, TestCases, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ferrite-backprop-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn config(input: usize, hidden: Vec<usize>, output: usize) -> NetworkConfig {
    NetworkConfig {
        input_size: input,
        hidden_sizes: hidden,
        output_size: output,
        min_random: -1.0,
        max_random: 1.0,
        learning_rate: 0.4,
        max_epochs: 25,
        error_threshold: 0.0,
        weight_rows: Vec::new(),
    }
}

#[test]
fn export_reload_export_is_byte_identical() {
    let mut net = Network::new(3, &[4, 2], 2).unwrap();
    net.randomize_weights_with(&mut StdRng::seed_from_u64(31), -2.0, 2.0);
    let inputs = vec![vec![0.1, 0.2, 0.3], vec![0.9, 0.8, 0.7]];
    let expected = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    net.train(&inputs, &expected, &TrainConfig::new(0.7, 40, -1.0)).unwrap();

    let first = records_to_string(net.weights());

    let text = config(3, vec![4, 2], 2).with_weights(net.weights()).to_string();
    let reloaded = NetworkConfig::parse(&text).unwrap().build_network().unwrap();
    let second = records_to_string(reloaded.weights());
    assert_eq!(first, second);

    let third = records_to_string(&parse_records(&second, reloaded.topology()).unwrap());
    assert_eq!(second, third);
}

#[test]
fn record_dump_file_has_one_line_per_weight() {
    let dir = scratch_dir("dump");
    let path = dir.join("weights.txt");
    let mut net = Network::new(2, &[3], 1).unwrap();
    net.randomize_weights_with(&mut StdRng::seed_from_u64(4), -1.0, 1.0);
    save_records(net.weights(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), net.topology().weight_count());
    assert!(lines[0].starts_with("w000 = "));
    assert!(lines[5].starts_with("w012 = "));
    assert!(lines[6].starts_with("w100 = "));
    assert!(lines[8].starts_with("w120 = "));
    assert_eq!(parse_records(&text, net.topology()).unwrap(), *net.weights());
}

#[test]
fn trained_config_file_drives_an_inference_run() {
    let dir = scratch_dir("config");
    let cases = TestCases::parse("4\n0,0\n0,1\n1,0\n1,1\n0\n0\n0\n1\n").unwrap();
    let base = config(2, vec![2], 1);

    let trained = run_cases(&base, &cases, RunMode::Train, Some(12)).unwrap();
    let path = dir.join("networkInfo.txt");
    base.with_weights(&trained.weights).save(&path).unwrap();

    let loaded = NetworkConfig::load(&path).unwrap();
    let inferred = run_cases(&loaded, &cases, RunMode::InferenceOnly, None).unwrap();
    assert_eq!(inferred.outputs, trained.outputs);
    assert_eq!(records_to_string(&inferred.weights), records_to_string(&trained.weights));
}

#[test]
fn autoencoder_output_survives_a_bitmap_file() {
    let dir = scratch_dir("bmp");
    let source_path = dir.join("source.bmp");
    let out_path = dir.join("out.bmp");
    let source = PixelGrid::new(3, 2, vec![0x102030, 0x405060, 0x708090, 0xA0B0C0, 0xD0E0F0, 0x000000]).unwrap();
    write_bmp(&source, &source_path).unwrap();

    let read_back = read_bmp(&source_path).unwrap();
    assert_eq!(read_back, source);

    let outcome = run_autoencoder(&config(1, vec![4], 1), &read_back, false, RunMode::Train, Some(3)).unwrap();
    write_bmp(&outcome.image, &out_path).unwrap();
    assert_eq!(read_bmp(&out_path).unwrap(), outcome.image);
}
