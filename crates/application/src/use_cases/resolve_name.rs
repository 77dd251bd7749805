use crate::ports::{RootHintsProvider, ServerQueryClient};
use futures::future::{join_all, BoxFuture};
use rootwalk_domain::{DnsResponse, DomainName, LookupKind, ResolveError, Resolved};
use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

const DEFAULT_MAX_DEPTH: u8 = 30;

/// Guards carried through every recursive step: a counter bounding nested
/// queries and the set of names already reached through alias hops.
/// Parallel branches clone the context, so one branch's hops never count
/// against a sibling.
#[derive(Debug, Clone)]
struct ResolutionContext {
    depth: u8,
    visited: HashSet<DomainName>,
}

impl ResolutionContext {
    fn new(origin: &DomainName) -> Self {
        let mut visited = HashSet::new();
        visited.insert(origin.clone());
        Self { depth: 0, visited }
    }

    fn deeper(mut self, limit: u8) -> Result<Self, ResolveError> {
        self.depth += 1;
        if self.depth > limit {
            return Err(ResolveError::DepthLimitExceeded(limit));
        }
        Ok(self)
    }

    /// Records an alias hop. False means the target was seen before and
    /// the chain loops.
    fn follow_alias(&mut self, target: &DomainName) -> bool {
        self.visited.insert(target.clone())
    }
}

/// Iterative resolution over already-decoded responses: locate a final
/// answer in the message at hand, or descend through delegations and
/// alias restarts until one is found or provably absent.
pub struct IterativeResolver {
    query_client: Arc<dyn ServerQueryClient>,
    root_hints: Arc<dyn RootHintsProvider>,
    max_depth: u8,
}

impl IterativeResolver {
    pub fn new(
        query_client: Arc<dyn ServerQueryClient>,
        root_hints: Arc<dyn RootHintsProvider>,
    ) -> Self {
        Self {
            query_client,
            root_hints,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Resolves `name` against `servers`, or from the root hints when the
    /// set is empty. `Ok(None)` is a definitive negative answer; an error
    /// is a transport or bootstrap failure.
    pub async fn resolve(
        &self,
        name: &DomainName,
        servers: Vec<IpAddr>,
        kind: LookupKind,
    ) -> Result<Option<Resolved>, ResolveError> {
        let ctx = ResolutionContext::new(name);
        self.resolve_inner(name.clone(), servers, kind, ctx).await
    }

    /// Decides one response for `name`: a direct answer, an alias chase,
    /// a delegation descent, or definitive absence. Touches no collaborator
    /// unless the message forces further resolution.
    pub async fn locate_answer(
        &self,
        name: &DomainName,
        kind: LookupKind,
        response: &DnsResponse,
    ) -> Result<Option<Resolved>, ResolveError> {
        let ctx = ResolutionContext::new(name);
        self.locate_inner(name.clone(), kind, response, Vec::new(), ctx)
            .await
    }

    fn resolve_inner(
        &self,
        name: DomainName,
        servers: Vec<IpAddr>,
        kind: LookupKind,
        ctx: ResolutionContext,
    ) -> BoxFuture<'_, Result<Option<Resolved>, ResolveError>> {
        Box::pin(async move {
            let ctx = ctx.deeper(self.max_depth)?;

            let servers = if servers.is_empty() {
                let roots = self.root_hints.root_servers().await?;
                if roots.is_empty() {
                    return Err(ResolveError::EmptyRootHints);
                }
                roots
            } else {
                servers
            };

            debug!(
                name = %name,
                kind = %kind,
                servers = servers.len(),
                depth = ctx.depth,
                "Issuing query"
            );

            let response = self
                .query_client
                .query(&servers, &name, kind.record_type())
                .await?;

            self.locate_inner(name, kind, &response, servers, ctx).await
        })
    }

    async fn locate_inner(
        &self,
        name: DomainName,
        kind: LookupKind,
        response: &DnsResponse,
        servers: Vec<IpAddr>,
        mut ctx: ResolutionContext,
    ) -> Result<Option<Resolved>, ResolveError> {
        let mut working = name;
        let mut chased_alias = false;

        // Direct answers first, chasing aliases within this message.
        loop {
            match kind {
                LookupKind::Address => {
                    if let Some(address) = response.address_answer(&working) {
                        return Ok(Some(Resolved::Address(address)));
                    }
                }
                LookupKind::MailExchange => {
                    if let Some(exchange) = response.lowest_mx(&working) {
                        return Ok(Some(Resolved::MailExchange(exchange.clone())));
                    }
                }
            }

            match response.alias_target(&working) {
                Some(target) => {
                    if !ctx.follow_alias(target) {
                        warn!(name = %working, target = %target, "Alias chain loops, giving up");
                        return Ok(None);
                    }
                    debug!(name = %working, target = %target, "Following alias");
                    working = target.clone();
                    chased_alias = true;
                }
                None => break,
            }
        }

        if response.answers.is_empty() && response.authorities.is_empty() {
            return Ok(None);
        }

        // SOA beside an empty answer section: the authority states that
        // the name or type does not exist.
        if response.answers.is_empty() && response.has_soa_authority() {
            debug!(name = %working, "Authoritative denial");
            return Ok(None);
        }

        // An alias chased to a target this message cannot answer starts
        // over from the roots; the message carries no delegation for it.
        if chased_alias {
            debug!(target = %working, "Restarting resolution for alias target");
            return self.resolve_inner(working, Vec::new(), kind, ctx).await;
        }

        let referrals = response.referrals(&working);
        if referrals.is_empty() {
            return Ok(None);
        }

        // Delegation descent. Glue supplies addresses where present; the
        // remaining nameserver names are resolved in parallel, each branch
        // starting from the current server context.
        let mut next_servers = response.glue_addresses(&referrals);
        let mut unglued: Vec<DomainName> = Vec::new();
        for target in &referrals {
            if !response.has_glue(target) {
                unglued.push((*target).clone());
            }
        }

        if !unglued.is_empty() {
            debug!(name = %working, count = unglued.len(), "Resolving unglued nameservers");
            let lookups: Vec<_> = unglued
                .into_iter()
                .map(|target| {
                    self.resolve_inner(target, servers.clone(), LookupKind::Address, ctx.clone())
                })
                .collect();

            for outcome in join_all(lookups).await {
                match outcome {
                    Ok(Some(Resolved::Address(address))) => {
                        if !next_servers.contains(&address) {
                            next_servers.push(address);
                        }
                    }
                    Ok(_) => {}
                    Err(e) => warn!(error = %e, "Nameserver address lookup failed"),
                }
            }
        }

        if next_servers.is_empty() {
            debug!(name = %working, "Delegation yielded no addresses, retrying from the roots");
            return self.resolve_inner(working, Vec::new(), kind, ctx).await;
        }

        self.resolve_inner(working, next_servers, kind, ctx).await
    }
}
