//! Track-mention extraction from episode summaries.
//!
//! Summaries are free text; track mentions appear in two shapes. Intro and
//! outro tracks sit on their own line ("Интро подкаста: …"), while tracks
//! played mid-episode are referenced in running text right after the
//! playlist name ("…Разрыв танцполов… композиция …").

use std::sync::LazyLock;

use regex::Regex;

// ^/$ anchor to line boundaries: summaries are multi-line blobs.
static INTRO_OUTRO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:Интро|Аутро) (?:подкаста|выпуска):\s+(?P<track>.*)$")
        .expect("intro/outro pattern must compile")
});

static EPISODE_MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)Разрыв танцполов.* (?:песн[я|ю|и](?: группы)?|композиция|трека?|кавер) (?P<track>.*?).?$",
    )
    .expect("episode mention pattern must compile")
});

/// Pull every track mention out of one episode summary.
///
/// Intro/outro matches come first in text order, then mid-episode mentions
/// in text order. No deduplication: a track mentioned twice is returned
/// twice. A summary without markers yields an empty vector.
pub fn extract_tracks(summary: &str) -> Vec<String> {
    let mut tracks = Vec::new();

    for caps in INTRO_OUTRO.captures_iter(summary) {
        tracks.push(caps["track"].trim_start_matches(' ').to_string());
    }

    for caps in EPISODE_MENTION.captures_iter(summary) {
        tracks.push(caps["track"].to_string());
    }

    tracks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_markers_no_output() {
        assert!(extract_tracks("Обычный разговорный выпуск, сегодня без музыки.").is_empty());
        assert!(extract_tracks("").is_empty());
    }

    #[test]
    fn intro_line_captures_remainder() {
        let tracks = extract_tracks("Интро подкаста: Artist - Title");
        assert_eq!(tracks, vec!["Artist - Title"]);
    }

    #[test]
    fn intro_and_outro_in_text_order() {
        let summary = "Первый выпуск после перерыва.\n\
                       Интро подкаста: Dead Blonde - Мальчик на девятке\n\
                       Аутро выпуска: GSPD - Party Like A Russian";
        let tracks = extract_tracks(summary);
        assert_eq!(
            tracks,
            vec![
                "Dead Blonde - Мальчик на девятке",
                "GSPD - Party Like A Russian",
            ]
        );
    }

    #[test]
    fn mention_excludes_trailing_punctuation() {
        let summary = "Эксклюзивно для Разрыв танцполов ремикс трека Artist - Title.";
        assert_eq!(extract_tracks(summary), vec!["Artist - Title"]);
    }

    #[test]
    fn mention_matches_each_synonym_noun() {
        let cases = [
            (
                "Сегодня в Разрыв танцполов вошла композиция Cream Soda - Плачу на техно.",
                "Cream Soda - Плачу на техно",
            ),
            (
                "Специально для Разрыв танцполов прозвучит песня группы Комбинация - Бухгалтер.",
                "Комбинация - Бухгалтер",
            ),
            (
                "В рубрике Разрыв танцполов сегодня кавер Молчат Дома - Судно.",
                "Молчат Дома - Судно",
            ),
        ];
        for (summary, expected) in cases {
            assert_eq!(extract_tracks(summary), vec![expected], "summary: {summary}");
        }
    }

    #[test]
    fn intro_matches_come_before_mentions() {
        let summary = "Интро подкаста: First - Track\n\
                       А ещё в Разрыв танцполов попала композиция Second - Track.";
        assert_eq!(
            extract_tracks(summary),
            vec!["First - Track", "Second - Track"]
        );
    }

    #[test]
    fn duplicate_mentions_are_kept() {
        let summary = "Интро подкаста: Same - Song\nАутро выпуска: Same - Song";
        assert_eq!(extract_tracks(summary), vec!["Same - Song", "Same - Song"]);
    }
}
