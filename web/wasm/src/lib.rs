use serde::{Deserialize, Serialize};
use trucors::{Bot, Card, GameIntel, Manilha, PassiveBot, RoundResult};
use wasm_bindgen::prelude::*;

/// Strength of `card` under `vira`, both given as tokens such as `"5C"`.
#[wasm_bindgen(js_name = relativeValue)]
pub fn relative_value(card: &str, vira: &str) -> Result<u8, JsValue> {
    let card = parse_card(card)?;
    let vira = parse_card(vira)?;
    card.relative_value(&vira).map_err(js_err)
}

/// Difference in strength between `a` and `b` under `vira`.
#[wasm_bindgen]
pub fn compare(a: &str, b: &str, vira: &str) -> Result<i16, JsValue> {
    let a = parse_card(a)?;
    let b = parse_card(b)?;
    let vira = parse_card(vira)?;
    a.compare_value_to(&b, &vira).map_err(js_err)
}

/// Named manilha of `card` under `vira`, or `null`.
#[wasm_bindgen]
pub fn manilha(card: &str, vira: &str) -> Result<Option<String>, JsValue> {
    let card = parse_card(card)?;
    let vira = parse_card(vira)?;
    let manilha = card.manilha(&vira).map_err(js_err)?;
    Ok(manilha.map(|manilha| manilha_to_str(manilha).to_owned()))
}

#[wasm_bindgen]
pub struct WasmBot {
    bot: PassiveBot,
}

#[wasm_bindgen]
impl WasmBot {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { bot: PassiveBot }
    }

    pub fn name(&self) -> String {
        self.bot.name().to_owned()
    }

    #[wasm_bindgen(js_name = maoDeOnzeResponse)]
    pub fn mao_de_onze_response(&self, intel: JsValue) -> Result<bool, JsValue> {
        let intel = intel_from_js(intel)?;
        Ok(self.bot.mao_de_onze_response(&intel))
    }

    #[wasm_bindgen(js_name = decideIfRaises)]
    pub fn decide_if_raises(&self, intel: JsValue) -> Result<bool, JsValue> {
        let intel = intel_from_js(intel)?;
        Ok(self.bot.decide_if_raises(&intel))
    }

    #[wasm_bindgen(js_name = chooseCard)]
    pub fn choose_card(&self, intel: JsValue) -> Result<JsValue, JsValue> {
        let intel = intel_from_js(intel)?;
        let play = self
            .bot
            .choose_card(&intel)
            .ok_or_else(|| JsValue::from_str("hand is empty"))?;
        to_js_value(&JsCardToPlay {
            card: play.content().to_string(),
            discard: play.is_discard(),
        })
    }

    #[wasm_bindgen(js_name = raiseResponse)]
    pub fn raise_response(&self, intel: JsValue) -> Result<i8, JsValue> {
        let intel = intel_from_js(intel)?;
        Ok(self.bot.raise_response(&intel).code())
    }
}

impl Default for WasmBot {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsIntel {
    cards: Vec<Card>,
    open_cards: Vec<Card>,
    vira: Card,
    opponent_card: Option<Card>,
    #[serde(default)]
    round_results: Vec<RoundResult>,
    score: u8,
    opponent_score: u8,
    hand_points: u8,
}

impl TryFrom<JsIntel> for GameIntel {
    type Error = trucors::IntelError;

    fn try_from(intel: JsIntel) -> Result<Self, Self::Error> {
        let builder = GameIntel::builder()
            .game_info(
                &intel.round_results,
                &intel.open_cards,
                intel.vira,
                intel.hand_points,
            )
            .bot_info(intel.cards, intel.score)
            .opponent_score(intel.opponent_score);
        match intel.opponent_card {
            Some(card) => builder.opponent_card(card).build(),
            None => builder.build(),
        }
    }
}

#[derive(Serialize)]
struct JsCardToPlay {
    card: String,
    discard: bool,
}

fn manilha_to_str(manilha: Manilha) -> &'static str {
    match manilha {
        Manilha::Ouros => "Ouros",
        Manilha::Espadilha => "Espadilha",
        Manilha::Copas => "Copas",
        Manilha::Zap => "Zap",
    }
}

fn parse_card(token: &str) -> Result<Card, JsValue> {
    token.parse().map_err(js_err)
}

fn intel_from_js(value: JsValue) -> Result<GameIntel, JsValue> {
    let intel: JsIntel = serde_wasm_bindgen::from_value(value)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    GameIntel::try_from(intel).map_err(js_err)
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
