//! Data models for items, crafts, queue requests and resolution output

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Namespaced item identifier (`type:category:name`, e.g. `item:farming:embergrain`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Craft identifier, opaque to the engine
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CraftId(String);

impl CraftId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CraftId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for CraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub tier: u32,
    pub rank: String,
}

impl Item {
    pub fn new(id: &str, name: &str, tier: u32, rank: &str) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.to_string(),
            tier,
            rank: rank.to_string(),
        }
    }
}

/// One required input of a single craft execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialLine {
    pub item: ItemId,
    pub qty: u64,
}

/// Output quantity as authored in the catalog: a fixed count or free text such as `"8-20"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputQty {
    Fixed(u64),
    Text(String),
}

/// One produced item of a single craft execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub item: ItemId,
    pub qty: OutputQty,
}

/// Profession, tool or building a craft needs. Carried for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementRef {
    pub id: String,
    pub level: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Craft {
    pub id: CraftId,
    pub name: String,
    pub requirement: Option<RequirementRef>,
    pub materials: Vec<MaterialLine>,
    pub outputs: Vec<OutputLine>,
}

impl Craft {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: CraftId::new(id),
            name: name.to_string(),
            requirement: None,
            materials: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn requires(mut self, id: &str, level: Option<u32>) -> Self {
        self.requirement = Some(RequirementRef {
            id: id.to_string(),
            level,
        });
        self
    }

    pub fn material(mut self, item: &str, qty: u64) -> Self {
        self.materials.push(MaterialLine {
            item: ItemId::new(item),
            qty,
        });
        self
    }

    pub fn output(mut self, item: &str, qty: u64) -> Self {
        self.outputs.push(OutputLine {
            item: ItemId::new(item),
            qty: OutputQty::Fixed(qty),
        });
        self
    }

    /// Output authored as text, e.g. a range like `"8-20"`
    pub fn output_text(mut self, item: &str, qty: &str) -> Self {
        self.outputs.push(OutputLine {
            item: ItemId::new(item),
            qty: OutputQty::Text(qty.to_string()),
        });
        self
    }

    pub fn output_for(&self, item: &str) -> Option<&OutputLine> {
        self.outputs.iter().find(|o| o.item.as_str() == item)
    }
}

/// A user request for `qty` units of an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueItem {
    pub item_id: ItemId,
    pub qty: u64,
}

impl QueueItem {
    pub fn new(item_id: &str, qty: u64) -> Self {
        Self {
            item_id: ItemId::new(item_id),
            qty,
        }
    }
}

/// Split `item=value`, rejecting a missing `=` or an empty item
pub(crate) fn split_assignment(s: &str) -> Result<(&str, &str), ParseError> {
    let (item, value) = s
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(s.to_string()))?;
    let item = item.trim();
    if item.is_empty() {
        return Err(ParseError::EmptyItem(s.to_string()));
    }
    Ok((item, value.trim()))
}

impl FromStr for QueueItem {
    type Err = ParseError;

    /// Parse `item=quantity`, e.g. `item:carpentry:table=2`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (item, value) = split_assignment(s)?;
        let qty = value.parse().map_err(|_| ParseError::InvalidQuantity {
            item: item.to_string(),
            value: value.to_string(),
        })?;
        Ok(QueueItem::new(item, qty))
    }
}

/// What a resolution step asks the player to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind<'a> {
    /// Base resource, gathered rather than crafted
    Gather,
    Craft {
        craft: &'a Craft,
        craft_index: usize,
        alternatives: Vec<&'a Craft>,
        crafts_executed: u64,
        total_produced: u64,
    },
    /// Item reappeared in its own ancestor chain; the branch stops here
    Circular,
}

/// One node of the pre-order "how do I get there" path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionStep<'a> {
    pub depth: usize,
    pub item_id: ItemId,
    pub name: String,
    pub qty: u64,
    pub kind: StepKind<'a>,
}

impl ResolutionStep<'_> {
    pub fn is_gather(&self) -> bool {
        matches!(self.kind, StepKind::Gather)
    }

    pub fn is_circular(&self) -> bool {
        matches!(self.kind, StepKind::Circular)
    }

    pub fn crafts_executed(&self) -> Option<u64> {
        match self.kind {
            StepKind::Craft {
                crafts_executed, ..
            } => Some(crafts_executed),
            _ => None,
        }
    }
}

/// Units of each base resource needed for a whole queue
pub type ResourceTotals = BTreeMap<ItemId, u64>;
