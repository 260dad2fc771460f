use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Data file: {}", config.data_path.display()),
		format!("  Output: {}", config.output.as_str()),
		format!("  Suggestion limit: {}", config.suggest_limit),
		format!(
			"  Booth table: {}",
			if config.booths_configured {
				"configured"
			} else {
				"built-in"
			}
		),
	];
	for range in config.booths.ranges() {
		lines.push(format!(
			"    Booth {}: {}-{}",
			range.booth, range.start, range.end
		));
	}
	for gap in config.booths.gaps() {
		lines.push(format!("    Unassigned: {}-{}", gap.start(), gap.end()));
	}
	lines
}
