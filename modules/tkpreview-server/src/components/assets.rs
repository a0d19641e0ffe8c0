//! Static page assets: the embedded stylesheet and the browser-side
//! interaction script. Everything here is fixed markup; the only
//! per-request content is injected separately as JSON string literals.

pub const STYLE: &str = r##"
    html, body { background:#fff; color:#222; font-family:system-ui; margin:0; padding:0; }
    .main-wrapper { max-width:1280px; margin:2em auto; width:98%; }
    .preview-row { display:flex; gap:3vw; justify-content:center; align-items:flex-start; min-height:900px; }
    .preview-col {
      flex:1 1 0; min-width:340px; max-width:620px;
      display:flex; flex-direction:column;
      background:#f6f9fc;
      border:1.5px solid #fff;
      border-top-left-radius:18px;
      border-top-right-radius:18px;
      border-bottom-left-radius:0;
      border-bottom-right-radius:0;
      box-shadow:0 16px 48px rgba(36,40,70,0.15), 0 4px 22px rgba(36,40,70,0.09), 0 1.5px 10px rgba(36,40,70,0.08);
      margin-bottom:24px; padding-bottom:0; position:relative;
      min-height:800px;
    }
    .card-content {
      flex: 1;
      display: flex;
      flex-direction: column;
    }
    .card-live-header, .card-pending-header {
      padding:9px 22px 7px; font-size:1rem; font-weight:400;
      border-top-left-radius:18px; border-top-right-radius:18px;
    }
    .card-live-header    { background:#427bff; color:#f5f7fa; }
    .card-pending-header { background:#434c5c; color:#f6f9fc; }
    .tile-preview-row, .modal-preview-row { display:flex; align-items:center; margin:20px 0 4px; }
    .tile-preview-label, .modal-label {
      color:#bac2d2; font-size:.92rem; font-weight:500; opacity:.70; margin-left:22px;
    }
    .tile-preview-controls, .modal-preview-controls { margin-left:auto; margin-right:20px; display:flex; gap:6px; align-items:center; }
    .tile-size-btn, .modal-size-btn {
      background:transparent; border:none; border-radius:5px;
      font-size:1.18rem; width:22px; height:22px;
      color:#ccd4e3; opacity:.6; cursor:pointer;
      transition:background .12s, color .12s;
    }
    .tile-size-btn:hover, .modal-size-btn:hover {
      background:#f3f6fb; color:#427bff; opacity:.95;
    }
    .font-size-control {
      display: flex;
      align-items: center;
      gap: 4px;
      margin-left: 12px;
      padding: 2px 6px;
      background: #f0f4f9;
      border-radius: 6px;
    }
    .font-size-btn {
      background: transparent;
      border: none;
      border-radius: 4px;
      font-size: 0.85rem;
      width: 20px;
      height: 20px;
      color: #8899b8;
      cursor: pointer;
      transition: all 0.12s;
      display: flex;
      align-items: center;
      justify-content: center;
      font-weight: 600;
    }
    .font-size-btn:hover {
      background: #e3e9f2;
      color: #427bff;
    }
    .font-size-indicator {
      font-size: 0.75rem;
      color: #7388a9;
      min-width: 30px;
      text-align: center;
      font-family: 'Menlo', 'Consolas', monospace;
    }
    .tile-html-preview-box {
      background:#156eff; color:#fff;
      border-radius:0; border:1px solid #fff;
      box-shadow:0 6px 32px rgba(36,40,70,0.16);
      display:flex; font-size:1.08rem; font-weight:500;
      margin:0 22px 10px; min-height:40px;
      overflow-x:auto; transition:width .3s, font-size .2s;
      width:360px; max-width:94%;
      padding: 0.25em 0.5em;
    }
    .tile-html-preview-box.pending {
      border-radius:12px; box-shadow:0 12px 48px rgba(36,40,70,0.18);
    }
    .light-divider { background:#e5e9f0; height:2px; margin:20px auto 16px; width:92%; border-radius:1px; }
    .modal-html-preview-box {
      background:#fff; color:#1a1a1a;
      border:1.5px solid #eaf0fc; border-radius:7px;
      box-shadow:0 6px 32px rgba(36,40,70,0.15);
      margin:0 22px 12px; height:650px;
      overflow:auto; transition:width .3s, height .3s, font-size .2s;
      width:520px; max-width:100%;
      scrollbar-width: thin; scrollbar-color:#dde1ee #f6f9fc;
      padding: 0.5em 1em;
    }
    .modal-html-preview-box > * {
      margin: 0 !important;
    }
    .modal-html-preview-box > div:first-child {
      padding-left: 0 !important;
      padding-right: 0 !important;
    }
    .modal-html-preview-box::-webkit-scrollbar { width:6px; background:#f6f9fc; }
    .modal-html-preview-box::-webkit-scrollbar-thumb {
      background:#dde1ee; border-radius:4px; min-height:24px;
    }
    .modal-html-preview-box:hover::-webkit-scrollbar-thumb {
      background:#bac6e4;
    }
    .footer-bar {
      width:100%; text-align:left; padding:4px 0 9px 18px;
      font-size:.89em; color:#9db0d7; opacity:.96;
      letter-spacing:.03em; font-weight:500;
      font-family:'Menlo','Consolas','monospace',system-ui;
      margin-top: auto;
    }
    .footer-bar i { font-style:italic; opacity:.88; letter-spacing:.04em; }
    .icon-bar {
      display:flex; gap:10px; margin:0 0 0 18px;
      align-items:center; padding-bottom: 10px;
      flex-wrap: wrap; position: relative;
    }
    .icon-bar.hide-for-capture { display:none!important; }
    .icon-btn {
      background:transparent; border:none; border-radius:7px;
      color:#b6bac5; cursor:pointer; display:flex;
      align-items:center; justify-content:center;
      font-size:1.23rem; width:34px; height:34px;
      padding:0; opacity:.7; position: relative;
      transition:background .15s, color .14s;
    }
    .icon-btn:hover { background:#f3f6fb; color:#427bff; opacity:1; }
    .icon-btn.tk-branded {
      background-image: url('https://info.tripkicks.com/hubfs/system/ausTk.png');
      background-size: 22px 22px;
      background-position: center;
      background-repeat: no-repeat;
      opacity: 0.5;
    }
    .icon-btn.tk-branded:hover {
      opacity: 0.8;
      background-color: #f3f6fb;
    }
    .icon-btn.tk-branded i {
      opacity: 0;
    }
    .icon-btn .tooltip {
      position:absolute; bottom:100%; left:50%;
      transform:translateX(-50%) translateY(-8px);
      background:#31343c; color:#fff; padding:6px 10px;
      border-radius:6px; white-space:nowrap;
      font-size:.75rem; font-weight:500;
      opacity:0; visibility:hidden;
      transition: opacity 0.2s ease, visibility 0.2s ease;
      z-index:1000;
      pointer-events: none;
      box-shadow: 0 2px 8px rgba(0,0,0,0.2);
    }
    .icon-btn .tooltip::after {
      content: '';
      position: absolute;
      top: 100%;
      left: 50%;
      transform: translateX(-50%);
      border-width: 5px;
      border-style: solid;
      border-color: #31343c transparent transparent transparent;
    }
    .icon-btn:hover .tooltip {
      opacity:1;
      visibility:visible;
    }
    .copy-success {
      position: fixed;
      top: 20px;
      right: 20px;
      background: #21921c;
      color: white;
      padding: 12px 20px;
      border-radius: 8px;
      box-shadow: 0 4px 12px rgba(0,0,0,0.15);
      opacity: 0;
      transform: translateY(-10px);
      transition: all 0.3s ease;
      z-index: 1000;
    }
    .copy-success.show {
      opacity: 1;
      transform: translateY(0);
    }
    .secret-input-container {
      position: fixed;
      bottom: 20px;
      right: 20px;
      opacity: 0.05;
      transition: opacity 0.5s ease;
      z-index: 999;
    }
    .secret-input-container:hover {
      opacity: 0.8;
    }
    .secret-input {
      padding: 6px 10px;
      border: 1px solid #f0f0f0;
      border-radius: 4px;
      font-size: 0.8rem;
      width: 120px;
      background: #fafafa;
      color: #999;
      font-family: 'Consolas', 'Monaco', monospace;
    }
    .secret-input:focus {
      outline: none;
      border-color: #ddd;
      background: #fff;
      color: #333;
      opacity: 1;
    }
    .secret-input::placeholder {
      color: #ccc;
      font-size: 0.75rem;
    }
    @media(max-width:1080px) {
      .preview-row { flex-direction:column; gap:18px; }
      .preview-col { max-width:98vw; }
    }
    @media(max-width:650px) {
      .main-wrapper { width:100vw; }
      .modal-html-preview-box { width:100%; }
      .secret-input-container { bottom: 10px; right: 10px; }
    }
"##;

pub const INTERACTION_SCRIPT: &str = r##"
const byId = function (id) { return document.getElementById(id); };
const clamp = function (v, lo, hi) { return Math.max(lo, Math.min(hi, v)); };
const safeName = function (text) { return text.replace(/[<>:"/\\|?*]/g, '_'); };

// --- Size and font controls ---
const sizes = {
  1: { tile: 360, modal: 520, height: 650, tileFont: 100, modalFont: 100 },
  2: { tile: 360, modal: 520, height: 650, tileFont: 100, modalFont: 100 }
};

function applySizes(n) {
  const s = sizes[n];
  const tile = byId('tileHtmlPreview' + n);
  const modal = byId('modalHtmlPreview' + n);
  tile.style.width = s.tile + 'px';
  tile.style.fontSize = s.tileFont + '%';
  modal.style.width = s.modal + 'px';
  modal.style.height = s.height + 'px';
  modal.style.fontSize = s.modalFont + '%';
  byId('tileFontIndicator' + n).textContent = s.tileFont + '%';
  byId('modalFontIndicator' + n).textContent = s.modalFont + '%';
}

[1, 2].forEach(function (n) {
  const s = sizes[n];
  applySizes(n);
  byId('tileWidthPlus' + n).onclick = function () { s.tile = clamp(s.tile + 40, 200, 600); applySizes(n); };
  byId('tileWidthMinus' + n).onclick = function () { s.tile = clamp(s.tile - 40, 200, 600); applySizes(n); };
  byId('modalWidthPlus' + n).onclick = function () { s.modal = clamp(s.modal + 40, 320, 800); applySizes(n); };
  byId('modalWidthMinus' + n).onclick = function () { s.modal = clamp(s.modal - 40, 320, 800); applySizes(n); };
  byId('modalHeightPlus' + n).onclick = function () { s.height = clamp(s.height + 50, 300, 900); applySizes(n); };
  byId('modalHeightMinus' + n).onclick = function () { s.height = clamp(s.height - 50, 300, 900); applySizes(n); };
  byId('tileFontPlus' + n).onclick = function () { s.tileFont = clamp(s.tileFont + 10, 50, 200); applySizes(n); };
  byId('tileFontMinus' + n).onclick = function () { s.tileFont = clamp(s.tileFont - 10, 50, 200); applySizes(n); };
  byId('modalFontPlus' + n).onclick = function () { s.modalFont = clamp(s.modalFont + 10, 50, 200); applySizes(n); };
  byId('modalFontMinus' + n).onclick = function () { s.modalFont = clamp(s.modalFont - 10, 50, 200); applySizes(n); };
  byId('refreshBtn' + n).onclick = function () { window.location.reload(); };
  byId('homeBtn' + n).onclick = function () { window.location.href = '/'; };
});

// --- Copy success toast ---
function showCopySuccess() {
  const toast = byId('copySuccess');
  toast.classList.add('show');
  setTimeout(function () { toast.classList.remove('show'); }, 2000);
}

// --- Image capture ---
async function waitForImagesLoaded(container) {
  const imgs = Array.from(container.querySelectorAll('img'));
  await Promise.all(imgs.map(function (img) {
    return img.complete ? Promise.resolve() : new Promise(function (resolve) {
      img.onload = img.onerror = resolve;
    });
  }));
}

function hideIconBars(hide) {
  document.querySelectorAll('.icon-bar').forEach(function (bar) {
    bar.classList.toggle('hide-for-capture', hide);
  });
}

async function snap(element) {
  return html2canvas(element, { useCORS: true, backgroundColor: '#fff', scale: 2, logging: false });
}

async function copySel(selector) {
  try {
    const node = document.querySelector(selector);
    if (!node) throw new Error('Element not found');
    await waitForImagesLoaded(node);
    hideIconBars(true);
    const canvas = await snap(node);
    hideIconBars(false);
    canvas.toBlob(function (blob) {
      if (blob) {
        navigator.clipboard.write([new ClipboardItem({ 'image/png': blob })])
          .then(showCopySuccess)
          .catch(function () { alert('Failed to copy to clipboard. Please try again.'); });
      }
    }, 'image/png');
  } catch (err) {
    console.error('Error capturing element:', err);
    alert('Error capturing element. Please try again.');
    hideIconBars(false);
  }
}

async function dlSel(selector, filename) {
  try {
    const node = document.querySelector(selector);
    if (!node) throw new Error('Element not found');
    await waitForImagesLoaded(node);
    hideIconBars(true);
    const canvas = await snap(node);
    hideIconBars(false);
    const link = document.createElement('a');
    link.download = filename + '.png';
    link.href = canvas.toDataURL('image/png');
    link.click();
  } catch (err) {
    console.error('Error downloading element:', err);
    alert('Error downloading element. Please try again.');
    hideIconBars(false);
  }
}

// --- HTML export and save ---
function exportHtmlCard(cardSelector, label) {
  try {
    const card = document.querySelector(cardSelector);
    if (!card) throw new Error('Card element not found');
    const footer = (card.querySelector('.footer-bar') || {}).innerText || '';
    const headerEl = card.querySelector('.card-live-header') || card.querySelector('.card-pending-header');
    const headerText = headerEl ? headerEl.innerText : label;
    const tileContent = (card.querySelector('.tile-html-preview-box') || {}).innerHTML || '';
    const modalContent = (card.querySelector('.modal-html-preview-box') || {}).innerHTML || '';
    const filename = safeName(footer) || label.replace(/\s+/g, '_');
    const html = ['<!DOCTYPE html>',
      '<html lang="en"><head><meta charset="utf-8"><title>' + label + '</title>',
      '<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">',
      '<link href="https://info.tripkicks.com/hubfs/system/mockup/tk-css.css" rel="stylesheet">',
      '<style>body{margin:0;background:#f4f9ff;font-family:system-ui;padding:2em 0}',
      '.wrapper{margin:0 auto;width:90%;max-width:620px;background:#f6f9fc;border-radius:18px;border:1.5px solid #fff;box-shadow:0 16px 48px rgba(36,40,70,0.15),0 4px 22px rgba(36,40,70,0.09);overflow:hidden}',
      '.footer-section{padding:8px 0 13px 22px;font-size:.98em;color:#7ca0d7;letter-spacing:.03em;font-weight:500;opacity:.96;font-family:Menlo,Consolas,monospace,system-ui}',
      '</style></head><body><div class="wrapper">',
      '<div class="card-header-section">' + headerText + '</div>',
      '<div class="content-section">',
      '<div class="preview-label">Tile Preview</div>',
      '<div class="tile-container">' + tileContent + '</div>',
      '<div class="preview-label">Modal Preview</div>',
      '<div class="modal-container">' + modalContent + '</div>',
      '</div>',
      '<div class="footer-section">' + footer + '</div>',
      '</div></body></html>'].join('\n');
    const blob = new Blob([html], { type: 'text/html' });
    const link = document.createElement('a');
    link.download = filename + '.html';
    link.href = URL.createObjectURL(blob);
    link.click();
    URL.revokeObjectURL(link.href);
  } catch (err) {
    console.error('Error exporting HTML:', err);
    alert('Error exporting HTML. Please try again.');
  }
}

function saveHtmlContent(elementId, footerId) {
  try {
    const element = byId(elementId);
    if (!element) throw new Error('Element not found');
    const footer = safeName(byId(footerId).innerText);
    const isTile = elementId.indexOf('tile') === 0;
    const filename = footer + '_' + (isTile ? 'tile' : 'modal');
    const wrapperStyle = isTile
      ? 'background:#156eff;color:#fff;border-radius:12px;padding:0.25em 0.5em;min-height:40px;width:fit-content;max-width:600px;'
      : 'background:#fff;color:#1a1a1a;border:1.5px solid #eaf0fc;border-radius:7px;box-shadow:0 6px 32px rgba(36,40,70,0.15);padding:0.5em 1em;width:100%;max-width:800px;min-height:300px;';
    const html = ['<!DOCTYPE html>',
      '<html lang="en"><head><meta charset="utf-8"><title>' + filename + '</title>',
      '<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">',
      '<link href="https://info.tripkicks.com/hubfs/system/mockup/tk-css.css" rel="stylesheet">',
      '<style>body{margin:0;padding:20px;background:#f4f9ff;font-family:system-ui;display:flex;justify-content:center;align-items:center;min-height:100vh}</style>',
      '</head><body>',
      '<div style="' + wrapperStyle + '">' + element.innerHTML + '</div>',
      '</body></html>'].join('\n');
    const blob = new Blob([html], { type: 'text/html' });
    const link = document.createElement('a');
    link.download = filename + '.html';
    link.href = URL.createObjectURL(blob);
    link.click();
    URL.revokeObjectURL(link.href);
  } catch (err) {
    console.error('Error saving HTML:', err);
    alert('Error saving HTML. Please try again.');
  }
}

async function copyHtmlCode(elementId) {
  try {
    const element = byId(elementId);
    if (!element) throw new Error('Element not found');
    await navigator.clipboard.writeText(element.innerHTML);
    showCopySuccess();
  } catch (err) {
    console.error('Error copying HTML:', err);
    alert('Failed to copy HTML code. Please try again.');
  }
}

byId('copyTile1').onclick = function () { copySel('#tileHtmlPreview1'); };
byId('copyModal1').onclick = function () { copySel('#modalHtmlPreview1'); };
byId('copyCard1').onclick = function () { copySel('#col1'); };
byId('copyTile2').onclick = function () { copySel('#tileHtmlPreview2'); };
byId('copyModal2').onclick = function () { copySel('#modalHtmlPreview2'); };
byId('copyCard2').onclick = function () { copySel('#col2'); };

byId('download2up1').onclick = byId('download2up2').onclick = function () {
  const footer1 = safeName(byId('footer1').innerText);
  const footer2 = safeName(byId('footer2').innerText);
  dlSel('.preview-row', footer1 + '_AND_' + footer2);
};

byId('exportHtml1').onclick = function () { exportHtmlCard('#col1', 'Currently Live'); };
byId('exportHtml2').onclick = function () { exportHtmlCard('#col2', 'Pending Update'); };
byId('saveTileHtml1').onclick = function () { saveHtmlContent('tileHtmlPreview1', 'footer1'); };
byId('saveTileHtml2').onclick = function () { saveHtmlContent('tileHtmlPreview2', 'footer2'); };
byId('saveModalHtml1').onclick = function () { saveHtmlContent('modalHtmlPreview1', 'footer1'); };
byId('saveModalHtml2').onclick = function () { saveHtmlContent('modalHtmlPreview2', 'footer2'); };
byId('copyTileCode1').onclick = function () { copyHtmlCode('tileHtmlPreview1'); };
byId('copyTileCode2').onclick = function () { copyHtmlCode('tileHtmlPreview2'); };
byId('copyModalCode1').onclick = function () { copyHtmlCode('modalHtmlPreview1'); };
byId('copyModalCode2').onclick = function () { copyHtmlCode('modalHtmlPreview2'); };

// --- Secret input and keyboard shortcuts ---
const secretInput = byId('secretInput');
secretInput.addEventListener('keypress', function (e) {
  if (e.key === 'Enter') {
    const value = secretInput.value.trim();
    if (value) {
      window.location.href = '?id=' + encodeURIComponent(value);
    }
  }
});

const currentId = new URLSearchParams(window.location.search).get('id');
if (currentId) {
  secretInput.value = currentId;
}

function focusSecretInput() {
  secretInput.focus();
  secretInput.select();
}

let tabCount = 0, tabTimer = null, gCount = 0, gTimer = null;
document.addEventListener('keydown', function (e) {
  if (e.key === 'Tab' && !e.shiftKey && !e.ctrlKey && !e.metaKey && !e.altKey) {
    tabCount += 1;
    clearTimeout(tabTimer);
    tabTimer = setTimeout(function () { tabCount = 0; }, 1000);
    if (tabCount === 3) {
      e.preventDefault();
      focusSecretInput();
      tabCount = 0;
    }
  } else {
    tabCount = 0;
  }

  if ((e.metaKey || e.ctrlKey) && e.key === 'k') {
    e.preventDefault();
    focusSecretInput();
  }

  if (e.key === 'g' && !e.ctrlKey && !e.metaKey && !e.altKey) {
    gCount += 1;
    clearTimeout(gTimer);
    gTimer = setTimeout(function () { gCount = 0; }, 500);
    if (gCount === 2) {
      e.preventDefault();
      focusSecretInput();
      gCount = 0;
    }
  } else if (e.key !== 'g') {
    gCount = 0;
  }

  if (e.key === 'Escape') {
    e.preventDefault();
    window.location.href = '/';
  }
});

if (typeof lucide !== 'undefined') {
  lucide.createIcons();
}
"##;
