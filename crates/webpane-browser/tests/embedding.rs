//! Drives a screen the way an embedding host does: only public API,
//! renderer callbacks delivered as queued `ScreenEvent`s.

use std::sync::{Arc, Mutex};

use url::Url;
use webpane_browser::{
    ActivityIndicator, BrowserScreen, ButtonOptionSet, LoadObserver, NavigationAction,
    NavigationDelegate, NavigationRequest, PageLoadState, PolicyDecision, Renderer, ScreenEvent,
    ScreenHost, ScreenServices, ShareRequest, TitleTicket, ToolbarButton, ToolbarItem,
    ToolbarSink,
};
use webpane_common::{Bounds, DeviceClass, RendererError};

/// Renderer that queues the events a real webview would raise.
#[derive(Default)]
struct ScriptedRenderer {
    queue: Vec<ScreenEvent>,
    loading: bool,
    document_title: Option<String>,
    unreachable: bool,
}

impl Renderer for ScriptedRenderer {
    fn load(&mut self, request: &NavigationRequest) -> Result<(), RendererError> {
        let url = request.url().to_string();
        self.loading = true;
        self.queue.push(ScreenEvent::PageLoad {
            state: PageLoadState::Started,
            url: url.clone(),
        });
        if self.unreachable {
            self.queue.push(ScreenEvent::LoadFailed {
                url,
                reason: "could not connect".into(),
            });
        } else {
            self.queue.push(ScreenEvent::Committed { url: url.clone() });
            self.queue.push(ScreenEvent::PageLoad {
                state: PageLoadState::Finished,
                url,
            });
        }
        Ok(())
    }

    fn go_back(&mut self) {}
    fn go_forward(&mut self) {}
    fn reload(&mut self) {}

    fn stop_loading(&mut self) {
        self.loading = false;
    }

    fn can_go_back(&self) -> bool {
        false
    }

    fn can_go_forward(&self) -> bool {
        false
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn current_url(&self) -> Option<Url> {
        None
    }

    fn request_title(&mut self, ticket: TitleTicket) {
        self.loading = false;
        self.queue.push(ScreenEvent::TitleResolved {
            ticket,
            title: self.document_title.clone(),
        });
    }
}

#[derive(Default)]
struct Host {
    device: DeviceClass,
    bottom: Vec<Vec<ToolbarItem>>,
    trailing: Vec<Vec<ToolbarItem>>,
    hidden: Vec<bool>,
    titles: Vec<String>,
    shares: Vec<ShareRequest>,
    dismissed: bool,
}

impl ToolbarSink for Host {
    fn set_toolbar_items(&mut self, items: &[ToolbarItem]) {
        self.bottom.push(items.to_vec());
    }

    fn set_trailing_items(&mut self, items: &[ToolbarItem]) {
        self.trailing.push(items.to_vec());
    }
}

impl ScreenHost for Host {
    fn device_class(&self) -> DeviceClass {
        self.device
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_size(1024.0, 768.0)
    }

    fn set_toolbar_hidden(&mut self, hidden: bool) {
        self.hidden.push(hidden);
    }

    fn set_title(&mut self, title: &str) {
        self.titles.push(title.to_string());
    }

    fn present_share(&mut self, request: &ShareRequest) {
        self.shares.push(request.clone());
    }

    fn dismiss(&mut self) {
        self.dismissed = true;
    }
}

#[derive(Default)]
struct Log(Mutex<Vec<String>>);

impl Log {
    fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl LoadObserver for Log {
    fn did_start_loading(&self) {
        self.0.lock().unwrap().push("start".into());
    }

    fn did_finish_loading(&self, success: bool) {
        self.0.lock().unwrap().push(format!("finish:{success}"));
    }
}

impl ActivityIndicator for Log {
    fn set_busy(&self, busy: bool) {
        self.0.lock().unwrap().push(format!("busy:{busy}"));
    }
}

/// Delegate that keeps every navigation on its own domain.
struct SameSite;

impl NavigationDelegate for SameSite {
    fn decide_policy(&self, action: &NavigationAction) -> Option<PolicyDecision> {
        match action.url.host_str() {
            Some("example.com") => None,
            _ => Some(PolicyDecision::Cancel),
        }
    }
}

fn pump(screen: &mut BrowserScreen<ScriptedRenderer, Host>) {
    while !screen.renderer().queue.is_empty() {
        let batch = std::mem::take(&mut screen.renderer_mut().queue);
        for event in batch {
            screen.handle_event(event);
        }
    }
}

fn open(
    input: &str,
    renderer: ScriptedRenderer,
    device: DeviceClass,
) -> (BrowserScreen<ScriptedRenderer, Host>, Arc<Log>, Arc<Log>) {
    let observer = Arc::new(Log::default());
    let activity = Arc::new(Log::default());
    let services = ScreenServices {
        observer: Some(observer.clone()),
        activity: activity.clone(),
        delegate: Some(Arc::new(SameSite)),
        ..Default::default()
    };
    let host = Host {
        device,
        ..Default::default()
    };
    let request = NavigationRequest::parse(input).unwrap();
    let screen = BrowserScreen::new(request, ButtonOptionSet::all(), renderer, host, services);
    (screen, observer, activity)
}

#[test]
fn bare_host_loads_over_https_and_shows_document_title() {
    let renderer = ScriptedRenderer {
        document_title: Some("Example Domain".into()),
        ..Default::default()
    };
    let (mut screen, observer, activity) = open("example.com", renderer, DeviceClass::Compact);
    assert_eq!(screen.url(), &Url::parse("https://example.com").unwrap());

    screen.will_appear();
    screen.did_load();
    pump(&mut screen);

    assert_eq!(screen.title(), Some("Example Domain"));
    assert_eq!(observer.entries(), vec!["start", "finish:true"]);
    assert_eq!(activity.entries(), vec!["busy:true", "busy:false"]);

    let host = screen.host();
    assert_eq!(host.hidden, vec![false]);
    assert!(host.trailing.is_empty());
    let last = host.bottom.last().unwrap();
    assert!(matches!(last.first(), Some(ToolbarItem::FixedSpace { .. })));
    assert!(matches!(last.last(), Some(ToolbarItem::FixedSpace { .. })));
    assert!(last.contains(&ToolbarItem::Button {
        button: ToolbarButton::Refresh,
        enabled: true,
    }));
}

#[test]
fn override_title_survives_load() {
    let renderer = ScriptedRenderer {
        document_title: Some("Example Domain".into()),
        ..Default::default()
    };
    let (mut screen, _, _) = open("https://example.com", renderer, DeviceClass::Compact);
    screen.set_override_title(Some("Support".into()));
    screen.did_load();
    pump(&mut screen);

    assert_eq!(screen.title(), Some("Support"));
    assert_eq!(screen.host().titles, vec!["Support"]);
}

#[test]
fn unreachable_host_reports_one_failure() {
    let renderer = ScriptedRenderer {
        unreachable: true,
        ..Default::default()
    };
    let (mut screen, observer, activity) = open("unreachable.invalid", renderer, DeviceClass::Regular);
    screen.did_load();
    pump(&mut screen);

    assert_eq!(observer.entries(), vec!["start", "finish:false"]);
    assert_eq!(activity.entries(), vec!["busy:true", "busy:false"]);
    assert_eq!(screen.title(), None);
}

#[test]
fn regular_device_uses_trailing_items_and_anchored_share() {
    let (mut screen, _, _) = open("example.com", ScriptedRenderer::default(), DeviceClass::Regular);
    screen.will_appear();
    screen.did_load();
    pump(&mut screen);
    screen.perform(ToolbarButton::Action);

    let host = screen.host();
    assert_eq!(host.hidden, vec![true]);
    assert!(host.bottom.is_empty());
    assert!(!host.trailing.is_empty());
    assert_eq!(
        host.shares,
        vec![ShareRequest::ShareSheet {
            url: Url::parse("https://example.com/").unwrap(),
            anchor: Some(ToolbarButton::Action),
        }]
    );
}

#[test]
fn delegate_decides_before_external_routing() {
    let (mut screen, _, _) = open("example.com", ScriptedRenderer::default(), DeviceClass::Compact);
    let inside = NavigationAction::new(Url::parse("https://example.com/about").unwrap());
    let outside = NavigationAction::new(Url::parse("https://elsewhere.org/").unwrap());

    assert_eq!(screen.decide_policy(&inside), PolicyDecision::Allow);
    assert_eq!(screen.decide_policy(&outside), PolicyDecision::Cancel);
}

#[test]
fn dismissal_freezes_the_chrome() {
    let (mut screen, _, _) = open("example.com", ScriptedRenderer::default(), DeviceClass::Compact);
    screen.done();
    screen.did_load();
    pump(&mut screen);

    let host = screen.host();
    assert!(host.dismissed);
    assert!(host.bottom.is_empty());
    assert!(host.titles.is_empty());
}
