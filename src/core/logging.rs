// =============================================================================
// SIMULATOR LOGGING SYSTEM - ZERO OVERHEAD
// =============================================================================
//
// Sistema de narração do Crisol com custo ZERO quando desabilitado.
//
// ARQUITETURA:
// A narração ("quem bloqueou em quê, quem foi acordado") é um canal lateral
// de diagnóstico, não faz parte do contrato funcional do motor. Por isso o
// sistema foi projetado para ser completamente removível:
// - Usa features do Cargo para compile-time filtering
// - Com feature "no_logs", TODOS os macros viram expressões vazias
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR: Estados impossíveis, deadlock detectado
// - WARN:  Situações suspeitas mas defendidas (ex: wake sem fila)
// - INFO:  Fluxo do escalonador (dispatch, término, criação)
// - DEBUG: Operações de semáforo/monitor
// - TRACE: Detalhes extremos (cada tick de CPU)
//
// FEATURES:
// - no_logs:   Remove 100% da narração
// - log_info:  Apenas ERROR, WARN, INFO
// - log_debug: ERROR, WARN, INFO, DEBUG
// - log_trace: Todos os níveis (padrão)
//
// COMO USAR:
//   sinfo!("[RUNNING] Thread {}", tid);
//   sdebug!("  -> Thread {} acquired {}", tid, name);
//
// =============================================================================

// =============================================================================
// PREFIXOS COM CORES ANSI
// =============================================================================
//
// Cores ANSI para terminais que suportam.
// Cada prefixo inclui: código de cor + texto + reset de cor.
//

pub const P_ERROR: &str = "\x1b[1;31m[ERRO]\x1b[0m ";
pub const P_WARN: &str = "\x1b[1;33m[WARN]\x1b[0m ";
pub const P_INFO: &str = "\x1b[32m[INFO]\x1b[0m ";
pub const P_DEBUG: &str = "\x1b[36m[DEBG]\x1b[0m ";
pub const P_TRACE: &str = "\x1b[35m[TRAC]\x1b[0m ";

/// Emite uma linha de narração com o prefixo de nível dado.
///
/// Em alvo hosted a formatação completa de `std::fmt` está disponível,
/// então os macros delegam tudo para cá.
pub fn emit(prefix: &str, args: std::fmt::Arguments<'_>) {
    println!("{prefix}{args}");
}

// =============================================================================
// MACROS DE LOG - NÍVEL ERROR
// =============================================================================
//
// serror! - Sempre ativo (exceto com no_logs)
// Usado para estados impossíveis e falhas de vivacidade.
//

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! serror {
    ($($arg:tt)*) => {{
        $crate::core::logging::emit(
            $crate::core::logging::P_ERROR,
            ::std::format_args!($($arg)*),
        );
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! serror {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL WARN
// =============================================================================
//
// swarn! - Ativo exceto com no_logs
// Usado para situações suspeitas mas defendidas.
//

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! swarn {
    ($($arg:tt)*) => {{
        $crate::core::logging::emit(
            $crate::core::logging::P_WARN,
            ::std::format_args!($($arg)*),
        );
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! swarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL INFO
// =============================================================================
//
// sinfo! - Ativo exceto com no_logs e log_error
// Usado para eventos importantes do fluxo de escalonamento.
//

#[cfg(not(any(feature = "no_logs", feature = "log_error")))]
#[macro_export]
macro_rules! sinfo {
    ($($arg:tt)*) => {{
        $crate::core::logging::emit(
            $crate::core::logging::P_INFO,
            ::std::format_args!($($arg)*),
        );
    }};
}

#[cfg(any(feature = "no_logs", feature = "log_error"))]
#[macro_export]
macro_rules! sinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL DEBUG
// =============================================================================
//
// sdebug! - Ativo apenas com log_debug ou log_trace
// Usado para as operações de semáforo e monitor.
//

#[cfg(any(feature = "log_debug", feature = "log_trace"))]
#[macro_export]
macro_rules! sdebug {
    ($($arg:tt)*) => {{
        $crate::core::logging::emit(
            $crate::core::logging::P_DEBUG,
            ::std::format_args!($($arg)*),
        );
    }};
}

#[cfg(not(any(feature = "log_debug", feature = "log_trace")))]
#[macro_export]
macro_rules! sdebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL TRACE
// =============================================================================
//
// strace! - Ativo apenas com log_trace
// Usado para o detalhe tick a tick.
//

#[cfg(feature = "log_trace")]
#[macro_export]
macro_rules! strace {
    ($($arg:tt)*) => {{
        $crate::core::logging::emit(
            $crate::core::logging::P_TRACE,
            ::std::format_args!($($arg)*),
        );
    }};
}

#[cfg(not(feature = "log_trace"))]
#[macro_export]
macro_rules! strace {
    ($($t:tt)*) => {{}};
}
