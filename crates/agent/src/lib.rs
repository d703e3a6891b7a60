//! Recipe acquisition and ingredient perception.
//!
//! This crate feeds the planning core with well-formed inputs:
//! - **Perception** (`perception`) - Parse free-form ingredient strings
//!   ("2 cup rice") into validated `Ingredient` records
//! - **Recipe sourcing** (`recipes`) - Produce candidate `Recipe` lists,
//!   either from the builtin catalog or by prompting an LLM and parsing its
//!   free-form output
//! - **LLM transport** (`llm`) - Pluggable `LlmClient` trait with an
//!   HTTP implementation for OpenAI/Anthropic/Ollama
//!
//! # Safety Principle
//!
//! The LLM only *proposes* candidate recipes. It never decides the day's
//! plan: scoring, selection, recency, and shopping-list math are
//! deterministic decisions made by `platewise-core`.

pub mod llm;
pub mod perception;
pub mod recipes;

pub use llm::{HttpLlmClient, LlmClient};
pub use recipes::{BuiltinRecipeSource, LlmRecipeSource, RecipeSource};
