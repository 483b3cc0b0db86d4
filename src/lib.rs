//! BST Visualizer - WASM Module
//!
//! This module provides the binary search tree engine behind the BST
//! Visualizer teaching tool. It is compiled to WebAssembly and exposes a
//! JavaScript-friendly API via wasm-bindgen; the JavaScript side draws the
//! returned nodes and edges and sequences the traversal highlights.
//!
//! # Architecture
//!
//! - `tree`: Unbalanced BST on petgraph's StableGraph, plus traversals
//! - `spatial`: R-tree occupancy set for provisional insertion placement
//! - `layout`: Level-order layout used for full redraws
//! - `view`: Serializable node/edge projections handed to JavaScript
//! - `key`: Number keys labelled the way JavaScript prints numbers

use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod key;
pub mod layout;
pub mod logging;
pub mod spatial;
pub mod tree;
pub mod view;

pub use config::TreeConfig;
pub use error::TreeError;
pub use key::NumberKey;
pub use layout::{LevelOrderConfig, LevelOrderLayout};
pub use spatial::{PlacementConfig, PositionAllocator};
pub use tree::{BinarySearchTree, Comparator, NaturalOrder, TraversalOrder};
pub use view::{EdgeView, NodeView, Position, TreeLayout};

/// Keys of the demo tree shown on first load, in insertion order.
pub const SAMPLE_KEYS: [f64; 15] = [
    10.0, 5.0, 15.0, 3.0, 7.0, 13.0, 17.0, 2.0, 4.0, 6.0, 8.0, 12.0, 14.0, 16.0, 18.0,
];

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init(logging::DEFAULT_LEVEL);
}

/// Coerce user input to a numeric key.
///
/// Surrounding whitespace is ignored. Text that is not a number is an
/// `InvalidKey`.
pub fn parse_key(text: &str) -> Result<f64, TreeError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| TreeError::InvalidKey(text.to_string()))
}

fn coerce_key(value: &JsValue) -> Result<NumberKey, TreeError> {
    if let Some(number) = value.as_f64() {
        return Ok(NumberKey(number));
    }
    match value.as_string() {
        Some(text) => parse_key(&text).map(NumberKey),
        None => Err(TreeError::InvalidKey(format!("{value:?}"))),
    }
}

/// Main entry point for the tree engine.
///
/// This struct wraps the BinarySearchTree and its layout engine and
/// provides the public API exposed to JavaScript.
#[wasm_bindgen]
pub struct BstVisualizerWasm {
    tree: BinarySearchTree<NumberKey>,
    layout: LevelOrderLayout,
}

#[wasm_bindgen]
impl BstVisualizerWasm {
    /// Create a new empty tree with default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            tree: BinarySearchTree::new(),
            layout: LevelOrderLayout::with_defaults(),
        }
    }

    /// Create an empty tree from a (possibly partial) configuration object.
    ///
    /// `undefined` or `null` means all defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<BstVisualizerWasm, JsError> {
        let config: TreeConfig = if config.is_undefined() || config.is_null() {
            TreeConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self::from_config(config)?)
    }

    /// Insert the demo tree's keys.
    #[wasm_bindgen(js_name = loadSample)]
    pub fn load_sample(&mut self) -> Result<(), JsError> {
        Ok(self.insert_all(&SAMPLE_KEYS)?)
    }

    // =========================================================================
    // Tree Operations
    // =========================================================================

    /// Insert a key (number or numeric string).
    ///
    /// Returns the node holding the key. Throws on a non-numeric value.
    pub fn insert(&mut self, value: JsValue) -> Result<JsValue, JsError> {
        let key = coerce_key(&value)?;
        let view = self.tree.insert(key)?;
        Ok(serde_wasm_bindgen::to_value(&view)?)
    }

    /// Remove a key.
    ///
    /// Returns true if the key existed and was removed.
    pub fn remove(&mut self, value: JsValue) -> Result<bool, JsError> {
        let key = coerce_key(&value)?;
        Ok(self.tree.remove(&key)?)
    }

    /// Check if a key is present.
    pub fn contains(&self, value: JsValue) -> Result<bool, JsError> {
        let key = coerce_key(&value)?;
        Ok(self.tree.contains(&key)?)
    }

    /// Remove all nodes.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Check if the tree has no nodes.
    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Get the number of nodes in the tree.
    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> u32 {
        u32::try_from(self.tree.len()).unwrap_or(u32::MAX)
    }

    // =========================================================================
    // Traversals
    // =========================================================================

    /// Nodes in preorder, at their cached positions.
    #[wasm_bindgen(js_name = preOrder)]
    pub fn pre_order(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.tree.pre_order())?)
    }

    /// Nodes in inorder (ascending keys), at their cached positions.
    #[wasm_bindgen(js_name = inOrder)]
    pub fn in_order(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.tree.in_order())?)
    }

    /// Nodes in postorder, at their cached positions.
    #[wasm_bindgen(js_name = postOrder)]
    pub fn post_order(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.tree.post_order())?)
    }

    /// Nodes in level order, at their layout positions.
    #[wasm_bindgen(js_name = levelOrder)]
    pub fn level_order(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.compute_layout().nodes)?)
    }

    /// Run a traversal by name: preOrder, inOrder, postOrder or levelOrder.
    pub fn traverse(&self, name: &str) -> Result<JsValue, JsError> {
        let order: TraversalOrder = name.parse()?;
        Ok(serde_wasm_bindgen::to_value(&self.traversal(order))?)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Full redraw description `{ nodes, edges }`.
    pub fn layout(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.compute_layout())?)
    }

    /// Layout positions as a Float64Array [x0, y0, x1, y1, ...] in level order.
    #[wasm_bindgen(js_name = layoutPositions)]
    pub fn layout_positions(&self) -> Float64Array {
        let positions = self.compute_layout().interleaved_positions();
        Float64Array::from(&positions[..])
    }

    /// Bounding box of the layout.
    ///
    /// Returns [min_x, min_y, max_x, max_y], or None if the tree is empty.
    #[wasm_bindgen(js_name = layoutBounds)]
    pub fn layout_bounds(&self) -> Option<Vec<f64>> {
        self.compute_layout()
            .bounds()
            .map(|(min_x, min_y, max_x, max_y)| vec![min_x, min_y, max_x, max_y])
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Set console log verbosity: off, error, warn, info, debug or trace.
    #[wasm_bindgen(js_name = setLogLevel)]
    pub fn set_log_level(level: &str) -> Result<(), JsError> {
        logging::set_level(logging::parse_level(level)?)?;
        Ok(())
    }
}

impl BstVisualizerWasm {
    /// Build an engine from an already-deserialized configuration.
    pub fn from_config(config: TreeConfig) -> Result<Self, TreeError> {
        config.validate()?;
        Ok(Self {
            tree: BinarySearchTree::with_placement(NaturalOrder, config.placement)?,
            layout: LevelOrderLayout::new(config.layout),
        })
    }

    /// Insert keys in order, stopping at the first invalid one.
    pub fn insert_all(&mut self, keys: &[f64]) -> Result<(), TreeError> {
        for &key in keys {
            self.tree.insert(NumberKey(key))?;
        }
        tracing::info!("loaded {} keys, tree has {} nodes", keys.len(), self.tree.len());
        Ok(())
    }

    /// The underlying tree.
    pub fn tree(&self) -> &BinarySearchTree<NumberKey> {
        &self.tree
    }

    /// Run the configured level-order layout.
    pub fn compute_layout(&self) -> TreeLayout {
        self.layout.compute(&self.tree)
    }

    /// Run a traversal, using the configured layout for level order.
    pub fn traversal(&self, order: TraversalOrder) -> Vec<NodeView> {
        match order {
            TraversalOrder::LevelOrder => self.compute_layout().nodes,
            other => self.tree.traverse(other),
        }
    }
}

impl Default for BstVisualizerWasm {
    fn default() -> Self {
        Self::new()
    }
}
