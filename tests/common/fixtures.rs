//! Static forecast corpora used across harnesses.
//!
//! Lines are in the shape the page extractor produces: a date label first,
//! then condition, temperature range, wind and an optional rain percentage
//! in whatever order and spacing the page markup left them.

/// Ten well-formed periods, one per day, all with a high temperature.
pub const CORPUS_TEN_DAY: &[&str] = &[
    "Today Mostly Sunny 72°/55° WindNW9mph Rain10%",
    "Sat 17 Scattered Showers 65°/52° WindSSW14mph Rain60%",
    "Sun 18 Rain and Snow 38°/29° WindN 18 mph Rain80%",
    "Mon 19 Thunderstorms Early 81°/63° WindSE 11 mph Rain70%",
    "Tue 20 Light Rain 59°/50° WindE7mph Rain55%",
    "Wed 21 Mostly Cloudy 61°/47° WindENE10mph Rain20%",
    "Thu 22 Sunny 68°/49° WindW5mph",
    "Fri 23 Scattered Thunderstorms 77°/60° WindSW15mph Rain45%",
    "Sat 24 Few Showers 70°/58° WindS12mph Rain30%",
    "Sun 25 Partly Cloudy 66°/51° WindWNW8mph Rain15%",
];

/// Night periods whose high is shown as `--`.
pub const CORPUS_NIGHT: &[&str] = &[
    "Tonight Partly Cloudy --/54° WindWNW6mph Rain5%",
    "Tonight Showers --/54° WindS8mph",
    "Tonight Snow --/21° WindNNW 16 mph Rain90%",
];

/// Lines that must never produce a record.
pub const CORPUS_GARBLED: &[&str] = &[
    "Garbled nonsense with no recognizable fields",
    "",
    "   ",
    "Mon 14 Rain 68°/54°",
    "Sunny 68°/54° WindN5mph",
    "Today Sunny WindN5mph Rain10%",
    "Today Hazy 68°/54° WindN5mph",
    "Today Sunny 68°/54° WindX5mph",
    "Today Sunny 68/54 WindN5mph",
];

/// Page-shaped lines interleaved with garbage, as a real scrape may look.
pub const CORPUS_MIXED: &[&str] = &[
    "Tonight Showers --/54° WindS8mph",
    "Garbled nonsense with no recognizable fields",
    "Mon 14 Rain 68°/54° WindNNE12mph Rain40%",
    "Advertisement",
    "Tue 15 Sunny 70°/52° WindN 5 mph Rain0%",
];

/// A trimmed-down ten-day forecast page with the markup the extractor keys on.
pub const FORECAST_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en-US">
<head><title>10-Day Weather Forecast</title></head>
<body>
<main>
<div class="DailyForecast--DisclosureList--nosQS" data-testid="DailyForecast">
  <details class="DaypartDetails--DayPartDetail--2XOOV Disclosure--themeList--1Dz21" open>
    <summary class="Disclosure--Summary--3GiL4">
      <div class="DetailsSummary--DetailsSummary--1DqhO DetailsSummary--fadeOnOpen--KnNyF">
        <h3 class="DetailsSummary--daypartName--kbngc">Tonight</h3>
        <div class="DetailsSummary--temperature--1kVVp"><span>--</span><span>/<span>54&deg;</span></span></div>
        <div class="DetailsSummary--condition--2JmHb"><span class="DetailsSummary--extendedData--307Ax">Showers</span></div>
        <div class="DetailsSummary--precip--1a98O"><span>Rain</span><span>40%</span></div>
        <div class="DetailsSummary--wind--1tv7t"><span>Wind</span><span>S 8 mph</span></div>
      </div>
    </summary>
    <div class="DaypartDetails--Content--2Yg3_">Showers early. Low 54F.</div>
  </details>
  <details class="DaypartDetails--DayPartDetail--2XOOV Disclosure--themeList--1Dz21">
    <summary class="Disclosure--Summary--3GiL4">
      <div class="DetailsSummary--DetailsSummary--1DqhO">
        <h3 class="DetailsSummary--daypartName--kbngc">Mon 14</h3>
        <div class="DetailsSummary--temperature--1kVVp"><span>68&#176;</span><span>/<span>54&#176;</span></span></div>
        <div class="DetailsSummary--condition--2JmHb"><span>Rain</span></div>
        <div class="DetailsSummary--precip--1a98O"><span>Rain</span><span>40%</span></div>
        <div class="DetailsSummary--wind--1tv7t"><span>Wind</span><span>NNE 12 mph</span></div>
      </div>
    </summary>
  </details>
  <details class="DaypartDetails--DayPartDetail--2XOOV">
    <summary><div class="DetailsSummary--DetailsSummary--1DqhO"><h3>Tue 15</h3></div></summary>
  </details>
</div>
<footer><div class="DetailsSummary--footer">Today Sunny 99°/80° WindN5mph</div></footer>
</main>
</body>
</html>
"#;

/// The same two periods as [`FORECAST_PAGE`], served minified: no whitespace
/// between any tags.
pub const FORECAST_PAGE_MINIFIED: &str = concat!(
    r#"<html><body><main><div class="DailyForecast--DisclosureList--nosQS">"#,
    r#"<details class="DaypartDetails--DayPartDetail--2XOOV"><summary class="Disclosure--Summary--3GiL4">"#,
    r#"<div class="DetailsSummary--DetailsSummary--1DqhO"><h3 class="DetailsSummary--daypartName--kbngc">Tonight</h3>"#,
    r#"<div class="DetailsSummary--temperature--1kVVp"><span>--</span><span>/<span>54&deg;</span></span></div>"#,
    r#"<div class="DetailsSummary--condition--2JmHb"><span>Showers</span></div>"#,
    r#"<div class="DetailsSummary--precip--1a98O"><span>Rain</span><span>40%</span></div>"#,
    r#"<div class="DetailsSummary--wind--1tv7t"><span>Wind</span><span>S 8 mph</span></div>"#,
    r#"</div></summary></details>"#,
    r#"<details class="DaypartDetails--DayPartDetail--2XOOV"><summary class="Disclosure--Summary--3GiL4">"#,
    r#"<div class="DetailsSummary--DetailsSummary--1DqhO"><h3 class="DetailsSummary--daypartName--kbngc">Mon 14</h3>"#,
    r#"<div class="DetailsSummary--temperature--1kVVp"><span>68&#176;</span><span>/<span>54&#176;</span></span></div>"#,
    r#"<div class="DetailsSummary--condition--2JmHb"><span>Rain</span></div>"#,
    r#"<div class="DetailsSummary--precip--1a98O"><span>Rain</span><span>40%</span></div>"#,
    r#"<div class="DetailsSummary--wind--1tv7t"><span>Wind</span><span>NNE 12 mph</span></div>"#,
    r#"</div></summary></details></div></main></body></html>"#,
);

/// `n` well-formed lines cycling through [`CORPUS_TEN_DAY`] and
/// [`CORPUS_NIGHT`], with every tenth line garbled.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    let good: Vec<&str> = CORPUS_TEN_DAY.iter().chain(CORPUS_NIGHT).copied().collect();
    (0..n)
        .map(|i| {
            if i % 10 == 9 {
                format!("garbled line {i}")
            } else {
                good[i % good.len()].to_string()
            }
        })
        .collect()
}
