use http::Method;
use mitm_redirect::{
    AllowTable, Decision, RedirectError, RedirectGatekeeper, RewriteTable, TunnelRequest,
};
use proptest::prelude::*;

fn gatekeeper() -> RedirectGatekeeper {
    let rewrite: RewriteTable = [
        ("pypi.org", "pypi.minibuild"),
        ("rubygems.org", "rubygems.minibuild"),
    ]
    .into_iter()
    .collect();
    let allow: AllowTable = ["github.com"].into_iter().collect();
    RedirectGatekeeper::new(rewrite, allow)
}

fn host_strategy() -> impl Strategy<Value = String> {
    // ".test" keeps generated hosts out of both fixture tables.
    proptest::string::string_regex("[a-z0-9](?:[a-z0-9-]{0,20}[a-z0-9])?\\.test")
        .expect("valid hostname regex")
}

fn path_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("/[a-z0-9/._-]{0,40}").expect("valid path regex")
}

fn non_connect_method_strategy() -> impl Strategy<Value = Method> {
    prop_oneof![
        Just(Method::GET),
        Just(Method::PUT),
        Just(Method::POST),
        Just(Method::HEAD),
        Just(Method::DELETE),
        Just(Method::OPTIONS),
        Just(Method::TRACE),
    ]
}

proptest! {
    #[test]
    fn non_connect_requests_always_bypass(
        method in non_connect_method_strategy(),
        host in proptest::option::of(host_strategy()),
        path in path_strategy(),
    ) {
        let gatekeeper = gatekeeper();
        let mut request = TunnelRequest::new(method, host, path);
        let before = request.clone();

        let decision = gatekeeper.decide(&mut request).expect("bypass never fails");
        prop_assert_eq!(decision, Decision::Passthrough);
        prop_assert_eq!(request, before);
    }

    #[test]
    fn unlisted_connect_is_rejected_without_mutation(
        host in host_strategy(),
        path in path_strategy(),
    ) {
        let gatekeeper = gatekeeper();
        let mut request = TunnelRequest::new(Method::CONNECT, Some(host.clone()), path);
        let before = request.clone();

        let error = gatekeeper
            .decide(&mut request)
            .expect_err("unlisted host must be rejected");
        prop_assert_eq!(error, RedirectError::HostNotAllowed { host });
        prop_assert_eq!(request, before);
    }

    #[test]
    fn rewrite_preserves_path_and_original_identity(path in path_strategy()) {
        let gatekeeper = gatekeeper();
        let mut request =
            TunnelRequest::new(Method::CONNECT, Some("pypi.org".to_string()), path.clone());

        let decision = gatekeeper.decide(&mut request).expect("mapped host");
        prop_assert_eq!(
            decision,
            Decision::Rewritten {
                original_host: "pypi.org".to_string(),
                mapped_host: "pypi.minibuild".to_string(),
            }
        );
        prop_assert_eq!(request.url_path, path);
        prop_assert_eq!(request.original_host.as_deref(), Some("pypi.org"));
    }
}
