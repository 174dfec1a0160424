//! # Scheduling Subsystem
//!
//! O módulo `sched` é o motor de execução do Crisol. Ele transforma um único
//! fluxo de controle em uma abstração capaz de "executar" múltiplas threads
//! lógicas intercaladas, tornando visível o que um kernel real faz escondido.
//!
//! ## 🎯 Propósito e Responsabilidade
//! - **Abstração de Thread:** `task` define o TCB e seu ciclo de vida
//!   (Ready → Running → {Ready | Blocked | Terminated}).
//! - **Política de Disparo:** `trigger` decide *qual* operação de
//!   sincronização dispara em cada tick (script determinístico ou sorteio).
//! - **Dispatch:** `scheduler` varre o registro em ordem fixa de id,
//!   concedendo um quantum de ticks a cada thread executável.
//!
//! ## 🏗️ Arquitetura: Cooperativo, Sem Paralelismo Real
//! Não há preempção por timer nem threads de SO: "concorrência" é a
//! intercalação de rajadas de quantum dentro de um loop síncrono. Bloquear
//! é mudar flag + entrar em fila; a varredura seguinte observa o efeito.
//!
//! ## ⚠️ Pontos de Atenção
//! - **Vivacidade:** scripts não balanceados (wait sem signal futuro) deixam
//!   threads bloqueadas para sempre. O laço detecta a varredura sem nenhuma
//!   thread executável e devolve `SchedError::Deadlock` em vez de girar.
//! - **Releitura de estado:** um signal disparado no turno de uma thread
//!   pode acordar outra no meio da mesma varredura; o estado é relido no
//!   topo de cada turno, nunca cacheado.

pub mod config;
pub mod debug;
pub mod scheduler;
pub mod task;
pub mod trigger;

pub use scheduler::run_round_robin;
pub use trigger::{RandomPolicy, ScriptedPolicy, SyncAction, TriggerPolicy, TriggerRule};
