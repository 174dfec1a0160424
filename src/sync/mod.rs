//! # Synchronization Primitives
//!
//! Primitivas clássicas de sincronização, simuladas.
//!
//! ## Hierarquia de Uso
//!
//! ```text
//! Semaphore  → Controle de recursos contáveis (contador + fila FIFO)
//! Monitor    → Exclusão mútua + fila de condição
//! ```
//!
//! ## Regras
//!
//! - "Bloquear" aqui é puramente mudança de flag de estado + entrada em
//!   fila: nenhuma operação suspende o programa hospedeiro.
//! - Toda mutação de TCB acontece dentro de um único passo lógico (tick),
//!   pelo único fluxo de controle; nenhuma disciplina de lock é necessária.
//! - Uma thread acordada vai para Ready, nunca direto para Running: ela
//!   volta a disputar CPU na próxima varredura do escalonador.

/// Semáforo de contagem (fila FIFO de espera)
pub mod semaphore;

/// Monitor (exclusão mútua + variável de condição)
pub mod monitor;

pub use monitor::Monitor;
pub use semaphore::Semaphore;
