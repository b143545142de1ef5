use crate::ast::{ASTNode, Evaluator, Parser};
use crate::context::Context;
use crate::error::CalcError;
use log::{debug, info};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::rc::Rc;

pub const DEFAULT_CACHE_SIZE: usize = 128;

/// One calculator session: a context shared by every statement, the builtin
/// table, and a cache of parsed statements keyed by their text.
pub struct Calculator {
    context: Context,
    evaluator: Evaluator,
    cache: Option<LruCache<String, Rc<ASTNode>>>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_cache_size(DEFAULT_CACHE_SIZE)
    }

    /// A session caching up to `max_cache_size` parsed statements; `0`
    /// disables the cache.
    pub fn with_cache_size(max_cache_size: usize) -> Self {
        Self {
            context: Context::new(),
            evaluator: Evaluator::with_builtins(),
            cache: NonZeroUsize::new(max_cache_size).map(LruCache::new),
        }
    }

    /// Evaluates one statement. The result is appended to the history only
    /// when evaluation succeeds.
    pub fn evaluate(&mut self, statement: &str) -> Result<f64, CalcError> {
        let ast = self.parse(statement)?;
        let value = self.evaluator.evaluate(&ast, &mut self.context)?;
        self.context.push_history(value);
        info!("${} = {}", self.context.history().len(), value);
        Ok(value)
    }

    fn parse(&mut self, statement: &str) -> Result<Rc<ASTNode>, CalcError> {
        let Some(cache) = self.cache.as_mut() else {
            return Ok(Rc::new(Parser::parse_expression(statement)?));
        };

        if let Some(ast) = cache.get(statement) {
            debug!("Parse cache hit: {}", statement);
            return Ok(Rc::clone(ast));
        }

        let ast = Rc::new(Parser::parse_expression(statement)?);
        cache.put(statement.to_string(), Rc::clone(&ast));
        Ok(ast)
    }

    pub fn history(&self) -> &[f64] {
        self.context.history()
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Number of parsed statements currently cached.
    pub fn cached_statements(&self) -> usize {
        self.cache.as_ref().map_or(0, LruCache::len)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
