use bjsolo::{Card, Game, GameOptions, GamePhase, Language, Outcome, Resolution, TableView};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, german: bool) -> Self {
        Self {
            game: Game::new(options(german), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32, german: bool) {
        self.game = Game::new(options(german), seed as u64);
    }

    #[wasm_bindgen(js_name = startRound)]
    pub fn start_round(&self) {
        self.game.start_round();
    }

    pub fn hit(&self) -> Result<(), JsValue> {
        self.game.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&self) -> Result<JsValue, JsValue> {
        let resolution = self.game.stand().map_err(js_err)?;
        to_js_value(&JsResolution::from(resolution))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Snapshot::from(self.game.view()))
    }
}

fn options(german: bool) -> GameOptions {
    let language = if german {
        Language::German
    } else {
        Language::English
    };
    GameOptions::default().with_language(language)
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    player_cards: Vec<JsCard>,
    dealer_cards: Vec<Option<JsCard>>,
    player_value: u8,
    dealer_value: u8,
    outcome: Option<&'static str>,
    message: Option<&'static str>,
    can_act: bool,
    cards_remaining: u32,
}

impl From<TableView> for Snapshot {
    fn from(view: TableView) -> Self {
        let dealer_cards = view
            .dealer_cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if view.dealer_hole_hidden && index == 1 {
                    None
                } else {
                    Some(JsCard::from(*card))
                }
            })
            .collect();

        Self {
            phase: phase_to_str(view.phase),
            player_cards: view.player_cards.iter().copied().map(JsCard::from).collect(),
            dealer_cards,
            player_value: view.player_value,
            dealer_value: view.dealer_value,
            outcome: view.outcome.map(outcome_to_str),
            message: view.message,
            can_act: view.can_act,
            cards_remaining: view.cards_remaining as u32,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    code: String,
    rank: &'static str,
    suit: &'static str,
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            code: card.to_string(),
            rank: card.label(),
            suit: card.suit.name(),
        }
    }
}

#[derive(Serialize)]
struct JsResolution {
    outcome: &'static str,
    player_value: u8,
    dealer_value: u8,
    dealer_drawn: Vec<JsCard>,
    deck_exhausted: bool,
}

impl From<Resolution> for JsResolution {
    fn from(resolution: Resolution) -> Self {
        Self {
            outcome: outcome_to_str(resolution.outcome),
            player_value: resolution.player_value,
            dealer_value: resolution.dealer_value,
            dealer_drawn: resolution
                .dealer_drawn
                .into_iter()
                .map(JsCard::from)
                .collect(),
            deck_exhausted: resolution.deck_exhausted,
        }
    }
}

fn phase_to_str(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Idle => "Idle",
        GamePhase::Dealing => "Dealing",
        GamePhase::PlayerTurn => "PlayerTurn",
        GamePhase::DealerTurn => "DealerTurn",
        GamePhase::Resolved => "Resolved",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBlackjack => "PlayerBlackjack",
        Outcome::DealerBlackjack => "DealerBlackjack",
        Outcome::PlayerBust => "PlayerBust",
        Outcome::DealerBust => "DealerBust",
        Outcome::PlayerWin => "PlayerWin",
        Outcome::DealerWin => "DealerWin",
        Outcome::Push => "Push",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
