//! Records returned by the API

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A champion at a given tier and rank
///
/// Every key of the payload is required; a missing one fails construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Champion {
    pub name: String,
    /// Release date as reported by the API
    pub released: String,
    /// The champion's class (`"class"` in the payload)
    #[serde(rename = "class")]
    pub class_tag: String,
    /// Star tier, 1-6
    pub tier: u8,
    /// Rank within the tier, 1-5
    pub rank: u8,
    pub prestige: i64,
    pub hp: i64,
    pub attack: i64,
    pub crit_rate: i64,
    pub crit_dmge: i64,
    pub armor: i64,
    pub block_prof: i64,
    pub energy_resist: i64,
    pub physical_resist: i64,
    pub crit_resist: i64,
    /// Signature ability text, in order
    pub sig_info: Vec<String>,
    /// Ability name to its description
    pub abilities: BTreeMap<String, Value>,
    pub challenger_rating: i64,
    pub tags: Vec<String>,
    pub contact: String,
    pub url_page: String,
    /// Not reliable, see [`Champion::portrait_url`]
    pub img_portrait: String,
    pub champid: String,
}

impl Champion {
    /// Build a champion from a decoded JSON payload
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Build a champion from a raw JSON body
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// The portrait link, if the API sent one
    ///
    /// The API fills this field, but the links it hands out do not
    /// currently resolve to an image.
    pub fn portrait_url(&self) -> Option<&str> {
        Some(self.img_portrait.as_str()).filter(|url| !url.is_empty())
    }
}

/// A war map node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Node {
    pub node_id: u32,
    pub node_name: String,
    /// Freeform description of the node's effect
    pub node_info: String,
}

impl Node {
    /// Build a node from a decoded JSON payload
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Build a node from a raw JSON body
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// The current state of one war tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct War {
    pub tier: u32,
    /// Node groupings
    pub nodes: BTreeMap<String, Vec<String>>,
    pub difficulty: String,
    /// Sent as text by the API (e.g. `"x4.5"`)
    pub tier_multiplier: String,
    pub tier_rank: String,
}

impl War {
    /// Build a war tier from a decoded JSON payload
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Build a war tier from a raw JSON body
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CHAMPION_KEYS: [&str; 23] = [
        "name",
        "released",
        "class",
        "tier",
        "rank",
        "prestige",
        "hp",
        "attack",
        "crit_rate",
        "crit_dmge",
        "armor",
        "block_prof",
        "energy_resist",
        "physical_resist",
        "crit_resist",
        "sig_info",
        "abilities",
        "challenger_rating",
        "tags",
        "contact",
        "url_page",
        "img_portrait",
        "champid",
    ];

    fn ghost() -> Value {
        json!({
            "name": "Ghost",
            "released": "2018-10-11",
            "class": "Tech",
            "tier": 6,
            "rank": 5,
            "prestige": 19341,
            "hp": 51201,
            "attack": 4102,
            "crit_rate": 1153,
            "crit_dmge": 804,
            "armor": 364,
            "block_prof": 2398,
            "energy_resist": 0,
            "physical_resist": 0,
            "crit_resist": 0,
            "sig_info": ["Phase Duration: 2.5s", "Energy Damage: 1200"],
            "abilities": {"Phasing": "Ghost phases out of the fight", "Stack": {"max": 5}},
            "challenger_rating": 150,
            "tags": ["#Villain", "#Female"],
            "contact": "Contact",
            "url_page": "https://example.org/ghost",
            "img_portrait": "",
            "champid": "ghost"
        })
    }

    #[test]
    fn test_champion_from_json() {
        let champ = Champion::from_json(ghost()).unwrap();

        assert_eq!(champ.name, "Ghost");
        assert_eq!(champ.class_tag, "Tech");
        assert_eq!(champ.tier, 6);
        assert_eq!(champ.rank, 5);
        assert_eq!(champ.prestige, 19341);
        assert_eq!(champ.sig_info.len(), 2);
        assert_eq!(champ.abilities["Stack"], json!({"max": 5}));
        assert_eq!(champ.tags, vec!["#Villain", "#Female"]);
        assert_eq!(champ.champid, "ghost");
        assert_eq!(champ.portrait_url(), None);
    }

    #[test]
    fn test_champion_serializes_class_key() {
        let champ = Champion::from_json(ghost()).unwrap();
        let value = serde_json::to_value(&champ).unwrap();

        assert_eq!(value, ghost());
    }

    #[test]
    fn test_champion_missing_any_key_fails() {
        for key in CHAMPION_KEYS {
            let mut value = ghost();
            value.as_object_mut().unwrap().remove(key);

            let err = Champion::from_json(value).unwrap_err();
            assert!(
                err.to_string().contains(key),
                "error for missing `{}` should name it: {}",
                key,
                err
            );
        }
    }

    #[test]
    fn test_champion_null_field_fails() {
        let mut value = ghost();
        value["hp"] = Value::Null;

        assert!(Champion::from_json(value).is_err());
    }

    #[test]
    fn test_node_from_slice() {
        let body = br#"{"node_id": 42, "node_name": "Power Gain", "node_info": "Gains power"}"#;
        let node = Node::from_slice(body).unwrap();

        assert_eq!(node.node_id, 42);
        assert_eq!(node.node_name, "Power Gain");
        assert_eq!(node.node_info, "Gains power");
    }

    #[test]
    fn test_node_missing_key_fails() {
        for key in ["node_id", "node_name", "node_info"] {
            let mut value = json!({"node_id": 1, "node_name": "a", "node_info": "b"});
            value.as_object_mut().unwrap().remove(key);
            assert!(Node::from_json(value).is_err(), "missing `{}` accepted", key);
        }
    }

    #[test]
    fn test_war_keeps_multiplier_as_text() {
        let value = json!({
            "tier": 3,
            "nodes": {"path1": ["1", "2", "3"], "boss": ["55"]},
            "difficulty": "Expert",
            "tier_multiplier": "x4.5",
            "tier_rank": "Gold 1"
        });
        let war = War::from_json(value).unwrap();

        assert_eq!(war.tier, 3);
        assert_eq!(war.nodes["path1"], vec!["1", "2", "3"]);
        assert_eq!(war.tier_multiplier, "x4.5");
        assert_eq!(war.tier_rank, "Gold 1");

        let numeric = json!({
            "tier": 3,
            "nodes": {},
            "difficulty": "Expert",
            "tier_multiplier": 4.5,
            "tier_rank": "Gold 1"
        });
        assert!(War::from_json(numeric).is_err());
    }
}
