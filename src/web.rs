pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Keynote Scalper</title>
<style>
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#0f1117;color:#e1e4e8;min-height:100vh;padding:16px}
h1{font-size:20px;margin-bottom:4px;color:#58a6ff}
h2{font-size:14px;font-weight:600;color:#8b949e;text-transform:uppercase;letter-spacing:1px;margin-bottom:8px}
.caption{font-size:12px;color:#8b949e}
.grid{display:grid;grid-template-columns:1fr 1fr;gap:12px;max-width:960px;margin:0 auto}
.full{grid-column:1/-1}
.card{background:#161b22;border:1px solid #30363d;border-radius:8px;padding:14px}
.status-bar{display:flex;gap:12px;flex-wrap:wrap;align-items:center}
.badge{padding:3px 10px;border-radius:12px;font-size:12px;font-weight:600;text-transform:uppercase}
.badge-dry{background:#6e40c9;color:#fff}
.badge-live{background:#da3633;color:#fff}
.badge-warn{background:#d29922;color:#000}
.stat{margin:4px 0}
.stat span{color:#8b949e;font-size:12px}
.stat strong{color:#e1e4e8;font-size:14px;margin-left:4px}
input,select,textarea{background:#0d1117;border:1px solid #30363d;color:#e1e4e8;padding:6px 10px;border-radius:4px;font-size:13px;width:100%}
textarea{font-family:'SF Mono',Monaco,Consolas,monospace;resize:vertical}
input:focus,select:focus,textarea:focus{outline:none;border-color:#58a6ff}
label{font-size:12px;color:#8b949e;display:block;margin-bottom:3px;margin-top:8px}
.row{display:flex;gap:8px}
.row>*{flex:1}
button{padding:8px 14px;border:none;border-radius:6px;font-size:13px;font-weight:600;cursor:pointer;transition:opacity .15s}
button:hover{opacity:.85}
.btn-primary{background:#238636;color:#fff}
.btn-warn{background:#d29922;color:#000}
.tabs{display:flex;gap:6px;margin-bottom:10px}
.tab{background:#30363d;color:#e1e4e8}
.tab.active{background:#1f6feb;color:#fff}
.pane{display:none}
.pane.active{display:block}
.mono{font-family:'SF Mono',Monaco,Consolas,monospace;font-size:12px}
.list{max-height:300px;overflow-y:auto}
.list::-webkit-scrollbar{width:6px}
.list::-webkit-scrollbar-thumb{background:#30363d;border-radius:3px}
.line{padding:3px 0;border-bottom:1px solid #21262d}
.ts{color:#484f58;margin-right:8px}
.alert{background:linear-gradient(135deg,#ff6b6b,#ee5a5a);color:#fff;padding:12px;border-radius:8px;margin:8px 0}
.alert small{opacity:.8}
.contract{border:1px solid #30363d;border-radius:6px;padding:10px;margin-bottom:8px}
.contract.done{border-color:#238636}
.chip{display:inline-block;background:#0d1117;border:1px solid #30363d;border-radius:4px;padding:1px 6px;margin:2px;font-size:12px}
.mrow{display:flex;justify-content:space-between;padding:4px 0;border-bottom:1px solid #21262d;font-size:13px}
.mrow>span{flex:1}
.bar{height:6px;background:#30363d;border-radius:3px;overflow:hidden;margin-top:6px}
.bar>div{height:100%;background:#3fb950}
.ev{padding:3px 0;border-bottom:1px solid #21262d;display:flex;gap:8px}
.ev-ts{color:#484f58;min-width:55px}
.ev-kind{color:#58a6ff;min-width:70px;font-weight:600}
.ev-detail{color:#c9d1d9}
.ev-trigger .ev-kind{color:#f85149}
.ev-trade .ev-kind{color:#3fb950}
.ev-warn .ev-kind{color:#d29922}
</style>
</head>
<body>

<div class="grid">

<div class="card full">
  <div style="display:flex;justify-content:space-between;align-items:center">
    <div>
      <h1>Keynote Scalper</h1>
      <div class="caption">Real-time speech-to-trade for "What will X say?" markets</div>
    </div>
    <div class="status-bar">
      <span id="modeBadge" class="badge badge-dry">DRY RUN</span>
      <span id="keyBadge" class="badge badge-warn" style="display:none">NO TRANSCRIPTION KEY</span>
    </div>
  </div>
  <div class="caption" id="limitsLine" style="margin-top:6px"></div>
</div>

<!-- Session stats -->
<div class="card">
  <h2>Session</h2>
  <div class="stat"><span>Triggers</span> <strong id="stTriggers">0</strong></div>
  <div class="stat"><span>Trades</span> <strong id="stTrades">0</strong></div>
  <div class="stat"><span>Transcripts</span> <strong id="stTranscripts">0</strong></div>
  <div class="stat"><span>Spent</span> <strong id="stSpent">$0</strong></div>
  <button class="btn-warn" style="margin-top:10px;width:100%" onclick="resetSession()">Reset Session</button>
</div>

<!-- Settings -->
<div class="card">
  <h2>Trading Settings</h2>
  <div class="row">
    <div><label>Contracts per trade</label><input id="cfgQty" type="number" min="1" max="100" value="10"></div>
    <div><label>Max price (¢)</label><input id="cfgMax" type="number" min="50" max="99" value="85"></div>
  </div>
  <div class="row">
    <div><label>Dry Run</label>
      <select id="cfgDry"><option value="true">Yes</option><option value="false">No</option></select>
    </div>
    <div><label>Match</label>
      <select id="cfgMode"><option value="substring">Substring</option><option value="whole_word">Whole word</option></select>
    </div>
    <div><label>Dedupe per text</label>
      <select id="cfgDedupe"><option value="false">No</option><option value="true">Yes</option></select>
    </div>
  </div>
  <button class="btn-primary" style="margin-top:10px;width:100%" onclick="saveSettings()">Save Settings</button>
</div>

<div class="card full">
  <div class="tabs">
    <button class="tab active" data-pane="capture" onclick="showTab(this)">Live Capture</button>
    <button class="tab" data-pane="triggers" onclick="showTab(this)">Triggers</button>
    <button class="tab" data-pane="markets" onclick="showTab(this)">Markets</button>
    <button class="tab" data-pane="history" onclick="showTab(this)">History</button>
  </div>

  <div class="pane active" id="pane-capture">
    <h2>Manual Transcript Input</h2>
    <div class="row">
      <textarea id="manualText" rows="4" placeholder="Type or paste transcript here..." style="flex:4"></textarea>
      <button class="btn-primary" style="flex:1" onclick="processText()">Process</button>
    </div>
    <h2 style="margin-top:14px">Recent Transcript</h2>
    <div class="list mono" id="transcriptList"></div>
    <div id="alerts"></div>
  </div>

  <div class="pane" id="pane-triggers">
    <h2>Trigger Map</h2>
    <div id="triggerMap"></div>
  </div>

  <div class="pane" id="pane-markets">
    <h2>Current Markets</h2>
    <div id="marketList"></div>
  </div>

  <div class="pane" id="pane-history">
    <div class="row">
      <div><h2>Triggers Detected</h2><div class="list" id="triggerHistory"></div></div>
      <div><h2>Trades Executed</h2><div class="list" id="tradeHistory"></div></div>
    </div>
  </div>
</div>

<!-- Event Log -->
<div class="card full">
  <h2>Event Log</h2>
  <div class="list mono" id="eventLog"></div>
</div>

<div class="caption full" id="footer" style="text-align:center"></div>

</div>

<script>
const API = '';

async function api(path, opts) {
  try {
    const r = await fetch(API + path, opts);
    const ct = r.headers.get('content-type') || '';
    const j = ct.includes('json') ? await r.json() : await r.text();
    if (!r.ok) throw new Error(typeof j === 'string' ? j : (j.detail || r.statusText));
    return j;
  } catch(e) {
    showToast(e.message);
    throw e;
  }
}

function showToast(msg) {
  const d = document.createElement('div');
  d.style.cssText = 'position:fixed;top:16px;right:16px;background:#da3633;color:#fff;padding:10px 16px;border-radius:6px;font-size:13px;z-index:999;max-width:350px';
  d.textContent = msg;
  document.body.appendChild(d);
  setTimeout(() => d.remove(), 4000);
}

function esc(s) {
  return String(s).replace(/[&<>"']/g, c => ({'&':'&amp;','<':'&lt;','>':'&gt;','"':'&quot;',"'":'&#39;'}[c]));
}

function showTab(btn) {
  document.querySelectorAll('.tab').forEach(t => t.classList.toggle('active', t === btn));
  document.querySelectorAll('.pane').forEach(p => p.classList.toggle('active', p.id === 'pane-' + btn.dataset.pane));
}

async function pollStatus() {
  try {
    const s = await api('/api/status');
    const el = id => document.getElementById(id);
    const mb = el('modeBadge');
    mb.textContent = s.dry_run ? 'DRY RUN' : 'LIVE (NO ORDERS)';
    mb.className = 'badge ' + (s.dry_run ? 'badge-dry' : 'badge-live');
    el('keyBadge').style.display = s.transcription_key_set ? 'none' : '';
    el('limitsLine').textContent = `Max Price: ${s.max_price_cents}¢ | Quantity: ${s.quantity} contracts | Match: ${s.match_mode}`;
    el('stTriggers').textContent = s.triggers;
    el('stTrades').textContent = s.trades;
    el('stTranscripts').textContent = s.transcripts;
    el('stSpent').textContent = '$' + s.total_spent;
    el('footer').textContent = `Session started: ${s.started_at} | Triggers loaded: ${s.triggers_loaded}`;
  } catch(e) {}
}

async function pollTranscripts() {
  try {
    const ts = await api('/api/transcripts');
    const el = document.getElementById('transcriptList');
    el.innerHTML = ts.length
      ? ts.slice(-10).map(t => `<div class="line"><span class="ts">[${t.timestamp}]</span>${esc(t.text)}</div>`).join('')
      : '<div class="caption">No transcripts yet. Use manual input or pipe text on stdin.</div>';
  } catch(e) {}
}

async function pollTriggers() {
  try {
    const tr = await api('/api/triggers');
    document.getElementById('alerts').innerHTML = tr.slice(-5).map(t => `
      <div class="alert">
        <strong>${t.degree === 1 ? '1st' : '2nd'} TRIGGER: "${esc(t.phrase)}"</strong><br>
        Contract: ${esc(t.contract_label)} | Ticker: ${esc(t.target_id.slice(-4))}<br>
        <small>${t.timestamp}</small>
      </div>`).join('');
    document.getElementById('triggerHistory').innerHTML = tr.length
      ? tr.slice().reverse().map(t => `<div class="line"><b>${esc(t.phrase)}</b> → ${esc(t.contract_label)} (${t.timestamp})</div>`).join('')
      : '<div class="caption">No triggers yet</div>';
  } catch(e) {}
}

async function pollTriggerMap() {
  try {
    const m = await api('/api/trigger-map');
    document.getElementById('triggerMap').innerHTML = Object.entries(m).map(([label, g]) => `
      <div class="contract ${g.triggered ? 'done' : ''}">
        <strong>${g.triggered ? '✅' : '⏳'} ${esc(label)}</strong> <span class="caption">${esc(g.target_id)}</span>
        <div class="row">
          <div><label>1st degree</label>${g.first.map(p => `<span class="chip">${esc(p)}</span>`).join('')}</div>
          <div><label>2nd degree</label>${g.second.slice(0, 8).map(p => `<span class="chip">${esc(p)}</span>`).join('')}
            ${g.second.length > 8 ? `<div class="caption">... and ${g.second.length - 8} more</div>` : ''}</div>
        </div>
      </div>`).join('');
  } catch(e) {}
}

async function pollMarkets() {
  try {
    const ms = await api('/api/markets');
    const icon = {triggered:'✅', buyable:'🟢', expensive:'🔴'};
    document.getElementById('marketList').innerHTML = ms.map(m => `
      <div class="mrow">
        <span>${icon[m.status]} <b>${esc(m.label)}</b></span>
        <span>Ask: ${m.ask_cents}¢</span>
        <span>Upside: ${m.upside_cents}¢</span>
        <span>${m.status === 'buyable' ? `<div class="bar"><div style="width:${m.upside_cents}%"></div></div>` : (m.status === 'triggered' ? 'Done' : '—')}</span>
      </div>`).join('');
  } catch(e) {}
}

async function pollTrades() {
  try {
    const t = await api('/api/trades');
    document.getElementById('tradeHistory').innerHTML = t.trades.length
      ? t.trades.slice().reverse().map(x => `<div class="line">✅ ${esc(x.contract_label)} x${x.quantity} @ ${x.price_cents}¢ ($${x.cost})</div>`).join('')
      : '<div class="caption">No trades yet</div>';
  } catch(e) {}
}

async function pollEvents() {
  try {
    const events = await api('/api/events');
    document.getElementById('eventLog').innerHTML = events.map(e => {
      let cls = 'ev';
      if (e.kind === 'trigger') cls += ' ev-trigger';
      else if (e.kind === 'trade') cls += ' ev-trade';
      else if (e.kind === 'warn' || e.kind === 'skip') cls += ' ev-warn';
      return `<div class="${cls}"><span class="ev-ts">${e.ts}</span><span class="ev-kind">${e.kind}</span><span class="ev-detail">${esc(e.detail)}</span></div>`;
    }).reverse().join('');
  } catch(e) {}
}

async function loadConfig() {
  try {
    const c = await api('/api/config');
    document.getElementById('cfgQty').value = c.quantity;
    document.getElementById('cfgMax').value = c.max_price_cents;
    document.getElementById('cfgDry').value = String(c.dry_run);
    document.getElementById('cfgMode').value = c.match_mode;
    document.getElementById('cfgDedupe').value = String(c.dedupe_within_call);
  } catch(e) {}
}

async function saveSettings() {
  await api('/api/settings', {method:'POST', headers:{'Content-Type':'application/json'}, body: JSON.stringify({
    quantity: parseInt(document.getElementById('cfgQty').value),
    max_price_cents: parseInt(document.getElementById('cfgMax').value),
    dry_run: document.getElementById('cfgDry').value === 'true',
    match_mode: document.getElementById('cfgMode').value,
    dedupe_within_call: document.getElementById('cfgDedupe').value === 'true',
  })});
  refresh();
}

async function processText() {
  const box = document.getElementById('manualText');
  if (!box.value.trim()) { showToast('enter some transcript text'); return; }
  await api('/api/transcript', {method:'POST', headers:{'Content-Type':'application/json'}, body: JSON.stringify({text: box.value})});
  box.value = '';
  refresh();
}

async function resetSession() {
  if (!confirm('Clear transcripts, triggers and trades?')) return;
  await api('/api/reset', {method:'POST'});
  refresh();
}

function refresh() {
  pollStatus(); pollTranscripts(); pollTriggers(); pollTriggerMap(); pollMarkets(); pollTrades(); pollEvents();
}

loadConfig();
refresh();
setInterval(refresh, 1500);
</script>
</body>
</html>
"##;
