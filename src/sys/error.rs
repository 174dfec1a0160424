//! # Erros do Motor de Simulação
//!
//! A taxonomia é deliberadamente curta:
//! - Erros de configuração (burst zero, tid inexistente) são bugs de setup
//!   e derrubam o processo via `panic!` — não há recuperação em runtime.
//! - Erros de vivacidade são o único caso reportável: um cenário cujo
//!   script de wait/signal não é balanceado deixa todas as threads
//!   restantes bloqueadas e nenhum progresso é possível.

use std::fmt;

/// Falhas observáveis de uma rodada de escalonamento.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    /// Todas as threads não-terminadas estão bloqueadas; como apenas
    /// threads em execução emitem signals, nenhuma será acordada.
    Deadlock {
        /// Threads presas em espera no momento da detecção.
        blocked: Vec<crate::sys::Tid>,
    },
}

impl fmt::Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedError::Deadlock { blocked } => {
                write!(f, "deadlock: threads bloqueadas sem sinalizador possivel (")?;
                for (i, tid) in blocked.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "T{tid}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl std::error::Error for SchedError {}
