//! Streaming result-card extractor
//!
//! This module walks the aggregator's HTML once, as a stream of tag events,
//! and collects one raw record per well-formed result card. No DOM is built;
//! the page layout is a known, narrow template and a single pass over
//! open-tag/text/close-tag events is enough.
//!
//! The matching logic lives in [`CardExtractor`], which is independent of the
//! tokenizer: it exposes `handle_open_tag` / `handle_text` / `handle_close_tag`
//! and a thin [`TokenSink`] adapter feeds it from `html5ever`.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

/// Class substring that marks a container element as a result card
const CARD_MARKER: &str = "result-card";

/// Element type delimiting cards; the only element tracked for nesting depth
const CONTAINER_TAG: &str = "div";

/// Element carrying the provider name in its alt attribute
const PROVIDER_TAG: &str = "img";

/// Element carrying the share link
const LINK_TAG: &str = "a";

/// Element carrying the resource title
const TITLE_TAG: &str = "h3";

/// Provider name used when a card has no usable image alt text
const UNKNOWN_PROVIDER: &str = "未知网盘";

/// One raw record extracted from a single result card
///
/// The href is as written in the page, possibly relative; resolution and
/// filtering happen downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCard {
    /// Provider name from the card's image alt, or the unknown sentinel
    pub provider: String,

    /// Resource title from the card's heading, trimmed
    pub title: String,

    /// Link target, trimmed of whitespace and surrounding backticks
    pub href: String,
}

/// Mutable state for the card currently being extracted
///
/// Reset is a single transition back to the default value; handlers never
/// clear individual fields ad hoc.
#[derive(Debug, Default)]
struct CardState {
    /// True between a card's opening container tag and its matching close
    in_card: bool,

    /// Open container elements since the card started
    depth: u32,

    /// Provider name captured from the image alt attribute
    provider: String,

    /// Last link target seen in this card, possibly stripped to empty
    href: Option<String>,

    /// Title stored from the most recent non-empty heading
    title: String,

    /// Text fragments accumulated while inside the heading
    fragments: Vec<String>,

    /// True between the heading's open and close tags
    in_title: bool,
}

impl CardState {
    /// Discards all card state, returning to the idle configuration
    fn reset(&mut self) {
        *self = Self::default();
    }

    /// Starts a fresh card: clean state with the opening container counted
    fn begin_card(&mut self) {
        self.reset();
        self.in_card = true;
        self.depth = 1;
    }
}

/// Finite-state extractor consuming open-tag/text/close-tag events
///
/// Between cards the machine is idle; a container element whose class
/// contains the card marker starts a card, and the matching close of that
/// container ends it. A card is emitted only if both a title and a link were
/// captured by the time it closes. Malformed markup degrades to fewer cards,
/// never to an error.
#[derive(Debug, Default)]
pub struct CardExtractor {
    state: CardState,
    cards: Vec<RawCard>,
}

impl CardExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles an open-tag event
    ///
    /// `attrs` are (name, value) pairs as tokenized; missing attributes are
    /// simply absent, never an error.
    pub fn handle_open_tag(&mut self, name: &str, attrs: &[(String, String)]) {
        if name == CONTAINER_TAG {
            if self.state.in_card {
                // Nested container inside an open card, marker or not
                self.state.depth += 1;
            } else if attr_value(attrs, "class").unwrap_or("").contains(CARD_MARKER) {
                self.state.begin_card();
            }
            return;
        }

        if !self.state.in_card {
            return;
        }

        match name {
            PROVIDER_TAG => {
                self.state.provider = attr_value(attrs, "alt").unwrap_or("").trim().to_string();
            }
            LINK_TAG => {
                let raw = ["href", "data-url", "data-href"]
                    .iter()
                    .filter_map(|key| attr_value(attrs, key))
                    .find(|value| !value.is_empty());
                if let Some(raw) = raw {
                    // Last link wins, even when stripping leaves it empty
                    self.state.href = Some(raw.trim().trim_matches('`').to_string());
                }
            }
            TITLE_TAG => {
                self.state.in_title = true;
                self.state.fragments.clear();
            }
            _ => {}
        }
    }

    /// Handles a text event; only heading text is accumulated
    pub fn handle_text(&mut self, text: &str) {
        if self.state.in_card && self.state.in_title {
            self.state.fragments.push(text.to_string());
        }
    }

    /// Handles a close-tag event
    ///
    /// Close events for elements with no corresponding open are ignored;
    /// depth is only adjusted inside a card and never goes negative.
    pub fn handle_close_tag(&mut self, name: &str) {
        if !self.state.in_card {
            return;
        }

        if name == TITLE_TAG {
            let text = self.state.fragments.join("");
            let text = text.trim();
            if !text.is_empty() {
                // An empty heading must not overwrite an earlier title
                self.state.title = text.trim_matches('`').trim().to_string();
            }
            self.state.fragments.clear();
            self.state.in_title = false;
            return;
        }

        if name == CONTAINER_TAG {
            self.state.depth -= 1;
            if self.state.depth > 0 {
                return;
            }
            self.emit_card();
            self.state.reset();
        }
    }

    /// Appends the current card to the output if it captured title and link
    fn emit_card(&mut self) {
        let href = self.state.href.take().unwrap_or_default();
        if href.is_empty() || self.state.title.is_empty() {
            return;
        }
        let provider = if self.state.provider.is_empty() {
            UNKNOWN_PROVIDER.to_string()
        } else {
            std::mem::take(&mut self.state.provider)
        };
        self.cards.push(RawCard {
            provider,
            title: std::mem::take(&mut self.state.title),
            href,
        });
    }

    /// Consumes the extractor, yielding the cards in document order
    pub fn into_cards(self) -> Vec<RawCard> {
        self.cards
    }
}

/// Looks up an attribute value by name
fn attr_value<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Adapter feeding html5ever tokens into the state machine
struct TokenAdapter {
    machine: CardExtractor,
}

impl TokenSink for TokenAdapter {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => {
                let name: &str = &tag.name;
                match tag.kind {
                    TagKind::StartTag => {
                        let attrs: Vec<(String, String)> = tag
                            .attrs
                            .iter()
                            .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                            .collect();
                        self.machine.handle_open_tag(name, &attrs);
                        if tag.self_closing {
                            self.machine.handle_close_tag(name);
                        }
                    }
                    TagKind::EndTag => self.machine.handle_close_tag(name),
                }
            }
            Token::CharacterTokens(text) => self.machine.handle_text(&text),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// Extracts all result cards from an HTML document
///
/// Runs the tokenizer over the full document in one pass and returns the raw
/// records in document order. Unbalanced or malformed markup never fails;
/// affected cards are silently dropped.
///
/// # Arguments
///
/// * `html` - The complete HTML document
///
/// # Returns
///
/// Raw records for every well-formed card, before URL resolution
///
/// # Example
///
/// ```
/// use pansearch::search::extract_cards;
///
/// let html = r#"<div class="result-card">
///     <img alt="百度网盘">
///     <h3>流浪地球4K</h3>
///     <a href="https://pan.baidu.com/s/abc123">取</a>
/// </div>"#;
/// let cards = extract_cards(html);
/// assert_eq!(cards.len(), 1);
/// assert_eq!(cards[0].title, "流浪地球4K");
/// ```
pub fn extract_cards(html: &str) -> Vec<RawCard> {
    let adapter = TokenAdapter {
        machine: CardExtractor::new(),
    };
    let mut tokenizer = Tokenizer::new(adapter, TokenizerOpts::default());
    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(html));
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();
    tokenizer.sink.machine.into_cards()
}
