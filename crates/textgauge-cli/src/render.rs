use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use textgauge_engine::TextReport;

pub fn print_report(report: &TextReport) {
    let use_color = std::io::stdout().is_terminal();

    let header = |text: &str| {
        if use_color {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    };

    println!("{}", header("Text statistics:"));
    println!("  Characters:  {}", report.char_count);
    println!("  Words:       {}", report.word_count);
    println!("  Sentences:   {}", report.sentence_count);
}
