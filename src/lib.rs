//! Crisol — Biblioteca do Simulador.
//!
//! Ponto central de exportação dos módulos do simulador.
//! Define a estrutura hierárquica do motor de escalonamento.

// --- Módulos Centrais (Infraestrutura) ---
pub mod core; // Logging, Contexto de Simulação
pub mod sys; // Tipos Fundamentais (Tid, SemId, Erros)

// --- Subsistemas de Simulação ---
pub mod sched; // Scheduler Round-Robin, Políticas de Gatilho
pub mod sync; // Primitivas de Sincronização (Semáforo, Monitor)

// Re-exportar o contexto para acesso fácil no binário
pub use crate::core::context::SimContext;
