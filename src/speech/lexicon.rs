//! Per-language word lists for the voice-repeat round.

use serde::{Deserialize, Serialize};

/// A word to be spoken, with its picture and reference recording.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpokenWord {
    pub word: String,
    pub image: String,
    pub audio: String,
}

impl SpokenWord {
    pub fn new(
        word: impl Into<String>,
        image: impl Into<String>,
        audio: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            image: image.into(),
            audio: audio.into(),
        }
    }
}

/// Words for one language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Short language tag, e.g. `en`.
    pub language: String,
    /// Display name in the language itself.
    pub name: String,
    /// Locale handed to the recognizer, e.g. `en-US`.
    pub locale: String,
    pub words: Vec<SpokenWord>,
}

/// Language tags with a built-in lexicon.
pub const LANGUAGES: [&str; 3] = ["en", "ta", "si"];

impl Lexicon {
    /// Built-in lexicon for `language`, falling back to English for tags
    /// without one.
    pub fn for_language(language: &str) -> Self {
        match language {
            "ta" => Self::build(
                "ta",
                "தமிழ்",
                "ta-IN",
                [
                    ("ஆப்பிள்", "apple", "apple-ta"),
                    ("புத்தகம்", "book", "book-ta"),
                    ("கார்", "car", "car-en"),
                    ("சூரியன்", "sun", "sun-ta"),
                    ("மரம்", "tree", "tree-ta"),
                ],
            ),
            "si" => Self::build(
                "si",
                "සිංහල",
                "si-LK",
                [
                    ("ඇපල්", "apple", "apple-si"),
                    ("පොත", "book", "book-si"),
                    ("කාර්", "car", "car-si"),
                    ("හිරු", "sun", "sun-si"),
                    ("ගස", "tree", "tree-si"),
                ],
            ),
            _ => Self::english(),
        }
    }

    pub fn english() -> Self {
        Self::build(
            "en",
            "English",
            "en-US",
            [
                ("Apple", "apple", "apple-en"),
                ("Book", "book", "book-en"),
                ("Car", "car", "car-en"),
                ("Sun", "sun", "sun-en"),
                ("Tree", "tree", "tree-en"),
            ],
        )
    }

    fn build(language: &str, name: &str, locale: &str, words: [(&str, &str, &str); 5]) -> Self {
        Self {
            language: language.to_string(),
            name: name.to_string(),
            locale: locale.to_string(),
            words: words
                .into_iter()
                .map(|(word, image, audio)| {
                    SpokenWord::new(
                        word,
                        format!("assets/images/{}.png", image),
                        format!("assets/Voices/{}.mp3", audio),
                    )
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SpokenWord> {
        self.words.get(index)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}
