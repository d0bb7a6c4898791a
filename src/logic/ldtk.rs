//! The subset of the LDtk project format the levels are authored in.

use super::*;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FieldInstance {
    #[serde(rename = "__identifier")]
    pub identifier: String,
    #[serde(rename = "__value")]
    pub value: serde_json::Value,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EntityInstance {
    #[serde(rename = "__identifier")]
    pub identifier: String,
    /// Top-left corner in pixels
    pub px: [i32; 2],
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub field_instances: Vec<FieldInstance>,
}

impl EntityInstance {
    pub fn pos(&self) -> IVec2 {
        IVec2::new(self.px[0], self.px[1])
    }

    pub fn size(&self) -> Option<IVec2> {
        Some(IVec2::new(self.width?, self.height?))
    }

    pub fn field(&self, identifier: &str) -> Option<&serde_json::Value> {
        self.field_instances
            .iter()
            .find(|field| field.identifier == identifier)
            .map(|field| &field.value)
            .filter(|value| !value.is_null())
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LayerInstance {
    #[serde(rename = "__identifier")]
    pub identifier: String,
    #[serde(default)]
    pub entity_instances: Vec<EntityInstance>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LevelDef {
    pub identifier: String,
    #[serde(default)]
    pub layer_instances: Vec<LayerInstance>,
}

impl LevelDef {
    pub fn layer<'a>(&'a self, identifier: &'a str) -> impl Iterator<Item = &'a EntityInstance> + 'a {
        self.layer_instances
            .iter()
            .filter(move |layer| layer.identifier == identifier)
            .flat_map(|layer| &layer.entity_instances)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Project {
    pub levels: Vec<LevelDef>,
}

impl Project {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, Error> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }

    pub fn level(&self, hue: Hue) -> Result<&LevelDef, Error> {
        self.levels
            .iter()
            .find(|level| level.identifier == hue.name())
            .ok_or(Error::MissingLevel { level: hue })
    }
}

#[test]
fn parses_minimal_project() {
    let project = Project::from_json(
        r#"{
            "jsonVersion": "1.3.0",
            "levels": [{
                "identifier": "red",
                "pxWid": 640,
                "layerInstances": [{
                    "__identifier": "Objects",
                    "entityInstances": [
                        { "__identifier": "Platform", "px": [0, 64], "width": 320, "height": 32 },
                        {
                            "__identifier": "Orb",
                            "px": [32, 32],
                            "fieldInstances": [{ "__identifier": "color", "__value": "blue" }]
                        }
                    ]
                }]
            }]
        }"#,
    )
    .unwrap();
    let level = project.level(Hue::Red).unwrap();
    let objects: Vec<_> = level.layer("Objects").collect();
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0].size(), Some(IVec2::new(320, 32)));
    assert_eq!(objects[1].size(), None);
    assert_eq!(objects[1].field("color"), Some(&serde_json::json!("blue")));
    assert!(matches!(project.level(Hue::Blue), Err(Error::MissingLevel { level: Hue::Blue })));
    assert!(Project::from_json("{").is_err());
}
